// 進捗監視の具象実装

use crate::core::ProgressReporter;
use async_trait::async_trait;

/// ログ出力による進捗報告実装
///
/// 標準出力は要約本文のために空けておき、進捗は全てtracing経由で出す。
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressReporter;

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_started(&self, total_chapters: usize, worker_count: usize) {
        tracing::info!(total_chapters, worker_count, "🚀 要約開始");
    }

    async fn report_progress(&self, completed: usize, total: usize) {
        if total > 0 {
            let percentage = (completed as f64 / total as f64) * 100.0;
            tracing::info!("📊 進捗: {completed}/{total} ({percentage:.1}%)");
        }
    }

    async fn report_error(&self, chapter: usize, error: &str) {
        tracing::warn!(chapter, error, "❌ 章の要約に失敗");
    }

    async fn report_completed(&self, succeeded: usize, failed: usize) {
        tracing::info!(succeeded, failed, "✅ 要約完了");
    }
}

/// 何もしない進捗報告実装（テスト・静音実行用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _total_chapters: usize, _worker_count: usize) {}

    async fn report_progress(&self, _completed: usize, _total: usize) {}

    async fn report_error(&self, _chapter: usize, _error: &str) {}

    async fn report_completed(&self, _succeeded: usize, _failed: usize) {}
}
