// 設定管理の具象実装

use crate::core::PipelineConfig;
use std::time::Duration;

/// 既定のワーカー数
pub const DEFAULT_MAX_CONCURRENT: usize = 5;

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultPipelineConfig {
    max_concurrent: usize,
    call_timeout: Option<Duration>,
    enable_progress: bool,
}

impl DefaultPipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent;
        self
    }

    pub fn with_call_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.call_timeout = timeout;
        self
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }
}

impl Default for DefaultPipelineConfig {
    fn default() -> Self {
        Self {
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            call_timeout: None,
            enable_progress: true,
        }
    }
}

impl PipelineConfig for DefaultPipelineConfig {
    fn max_concurrent_tasks(&self) -> usize {
        self.max_concurrent
    }

    fn call_timeout(&self) -> Option<Duration> {
        self.call_timeout
    }

    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }
}
