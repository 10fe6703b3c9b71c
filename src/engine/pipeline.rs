// Pipeline - JobQueue・ワーカープール・Collectorの組み立て

use super::collector::spawn_result_collector;
use super::job_queue::JobQueue;
use super::worker::spawn_workers;
use crate::core::{
    Chapter, PipelineConfig, ProcessingResult, ProgressReporter, Summarizer, SummaryError,
    SummaryReport,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// 1回の要約実行を担うパイプライン
pub struct SummaryPipeline<S: ?Sized> {
    summarizer: Arc<S>,
}

impl<S> SummaryPipeline<S>
where
    S: Summarizer + ?Sized + 'static,
{
    pub fn new(summarizer: Arc<S>) -> Self {
        Self { summarizer }
    }

    /// 章テキストの列を並列に要約し、章番号順のレポートを返す
    pub async fn execute<C, R>(
        &self,
        chapter_texts: Vec<String>,
        config: &C,
        reporter: Arc<R>,
    ) -> ProcessingResult<SummaryReport>
    where
        C: PipelineConfig + ?Sized,
        R: ProgressReporter + ?Sized + 'static,
    {
        let start_time = Instant::now();

        let worker_count = config.max_concurrent_tasks();
        if worker_count == 0 {
            return Err(SummaryError::configuration("ワーカー数は1以上である必要があります"));
        }

        let chapters: Arc<[Chapter]> = Chapter::from_texts(chapter_texts).into();
        let total = chapters.len();
        reporter.report_started(total, worker_count).await;

        if total == 0 {
            reporter.report_completed(0, 0).await;
            return Ok(SummaryReport::empty(worker_count));
        }

        // 全ジョブを投入して閉じてからワーカーを起動する
        let queue = JobQueue::preloaded(total)?;

        // 結果チャンネルは章数ぶりの容量を持ち、送信でブロックしない
        let (result_tx, result_rx) = mpsc::channel(total);

        let worker_handles = spawn_workers(
            worker_count,
            self.summarizer.clone(),
            chapters,
            queue.receiver(),
            result_tx,
            config.call_timeout(),
        );

        let collector_handle = spawn_result_collector(
            result_rx,
            total,
            reporter.clone(),
            config.enable_progress_reporting(),
        );

        // ワーカーのパニックはCollector側の件数不足より先に報告する
        let mut processed = 0;
        for handle in worker_handles {
            processed += handle.await??;
        }

        // 全件受信が完了シグナル
        let results = collector_handle.await??;
        if processed != total {
            return Err(SummaryError::channel(format!(
                "処理件数 {processed} が章数 {total} と一致しません"
            )));
        }

        let elapsed_ms = start_time.elapsed().as_millis() as u64;
        let report = SummaryReport::new(results, worker_count, elapsed_ms);
        reporter
            .report_completed(report.succeeded, report.failed)
            .await;

        Ok(report)
    }
}
