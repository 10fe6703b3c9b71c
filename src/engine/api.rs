// 高レベル公開API
// SummaryEngineを簡単に組み立てるための便利な関数

use super::SummaryEngine;
use crate::core::Summarizer;
use crate::services::{ConsoleProgressReporter, DefaultPipelineConfig, NoOpProgressReporter};
use std::sync::Arc;

/// デフォルト設定（ワーカー5、タイムアウト無し、進捗ログ有り）のエンジンを作成
pub fn create_default_summary_engine<S>(
    summarizer: S,
) -> SummaryEngine<S, DefaultPipelineConfig, ConsoleProgressReporter>
where
    S: Summarizer + 'static,
{
    SummaryEngine::new(
        Arc::new(summarizer),
        DefaultPipelineConfig::default(),
        Arc::new(ConsoleProgressReporter::new()),
    )
}

/// 進捗報告を行わない静音エンジンを作成
pub fn create_quiet_summary_engine<S>(
    summarizer: S,
    max_concurrent: usize,
) -> SummaryEngine<S, DefaultPipelineConfig, NoOpProgressReporter>
where
    S: Summarizer + 'static,
{
    SummaryEngine::new(
        Arc::new(summarizer),
        DefaultPipelineConfig::default()
            .with_max_concurrent(max_concurrent)
            .with_progress_reporting(false),
        Arc::new(NoOpProgressReporter::new()),
    )
}
