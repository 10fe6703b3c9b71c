// 要約システムのトレイト定義
// ワーカーが依存する抽象化インターフェースを定義

use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use std::time::Duration;

/// 章テキストを要約する外部サービスの抽象化
///
/// ワーカーは具象クライアントを知らず、このトレイト経由でのみ呼び出す。
/// テストでは決定的なフェイクや`MockSummarizer`に差し替える。
#[automock]
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// 章テキストの要約を返す
    async fn summarize(&self, text: &str) -> Result<String>;
}

// Summarizer for Box<dyn Summarizer>
#[async_trait]
impl Summarizer for Box<dyn Summarizer> {
    async fn summarize(&self, text: &str) -> Result<String> {
        self.as_ref().summarize(text).await
    }
}

/// パイプライン設定を抽象化するトレイト
#[automock]
pub trait PipelineConfig: Send + Sync {
    /// 同時に動くワーカー数
    fn max_concurrent_tasks(&self) -> usize;

    /// 1回の要約呼び出しのタイムアウト（Noneなら無制限）
    fn call_timeout(&self) -> Option<Duration>;

    /// 進捗報告を有効にするかどうか
    fn enable_progress_reporting(&self) -> bool;
}

/// 進捗報告の抽象化トレイト
#[automock]
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// 処理開始時の報告
    async fn report_started(&self, total_chapters: usize, worker_count: usize);

    /// 結果を1件受け取るたびの報告
    async fn report_progress(&self, completed: usize, total: usize);

    /// 章の要約に失敗したときの報告
    async fn report_error(&self, chapter: usize, error: &str);

    /// 処理完了時の報告
    async fn report_completed(&self, succeeded: usize, failed: usize);
}

// ProgressReporter for Box<dyn ProgressReporter>
#[async_trait]
impl ProgressReporter for Box<dyn ProgressReporter> {
    async fn report_started(&self, total_chapters: usize, worker_count: usize) {
        self.as_ref()
            .report_started(total_chapters, worker_count)
            .await
    }

    async fn report_progress(&self, completed: usize, total: usize) {
        self.as_ref().report_progress(completed, total).await
    }

    async fn report_error(&self, chapter: usize, error: &str) {
        self.as_ref().report_error(chapter, error).await
    }

    async fn report_completed(&self, succeeded: usize, failed: usize) {
        self.as_ref().report_completed(succeeded, failed).await
    }
}
