// Worker - 章の要約を行う並列ワーカー

use super::job_queue::JobReceiver;
use crate::core::{Chapter, ChapterSummary, ProcessingResult, Summarizer, SummaryError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// 1章を要約して結果を作る
///
/// 失敗してもエラーは返さず、プレースホルダー付きの結果にする。
pub async fn summarize_chapter<S>(
    summarizer: &S,
    chapter: &Chapter,
    call_timeout: Option<Duration>,
) -> ChapterSummary
where
    S: Summarizer + ?Sized,
{
    let call = summarizer.summarize(&chapter.text);

    let outcome = match call_timeout {
        Some(limit) => match tokio::time::timeout(limit, call).await {
            Ok(result) => result,
            Err(_) => Err(anyhow::anyhow!(
                "要約呼び出しが{}秒でタイムアウトしました",
                limit.as_secs_f64()
            )),
        },
        None => call.await,
    };

    match outcome {
        Ok(summary) => ChapterSummary::success(chapter.index, summary),
        Err(error) => {
            let error = SummaryError::summarization(chapter.index, format!("{error:#}"));
            tracing::debug!(
                chapter = chapter.index,
                severity = error.severity().as_str(),
                %error,
                "章の要約に失敗、プレースホルダーで継続"
            );
            ChapterSummary::failure(chapter.index, error.to_string())
        }
    }
}

/// 単一ワーカー
///
/// キューが空になるまで章を取り出して要約し、結果チャンネルへ送る。
/// 戻り値は処理したジョブ数。
pub fn spawn_worker<S>(
    worker_id: usize,
    summarizer: Arc<S>,
    chapters: Arc<[Chapter]>,
    jobs: JobReceiver,
    result_tx: mpsc::Sender<ChapterSummary>,
    call_timeout: Option<Duration>,
) -> tokio::task::JoinHandle<ProcessingResult<usize>>
where
    S: Summarizer + ?Sized + 'static,
{
    tokio::spawn(async move {
        let mut processed = 0;

        while let Some(index) = jobs.next_job().await {
            let chapter = chapters.get(index).ok_or_else(|| {
                SummaryError::channel(format!("存在しない章 {index} がキューから取り出されました"))
            })?;

            tracing::debug!(worker_id, chapter = index, "章の要約を開始");
            let result = summarize_chapter(summarizer.as_ref(), chapter, call_timeout).await;
            processed += 1;

            if result_tx.send(result).await.is_err() {
                // 結果チャンネルが閉じられた場合は終了
                tracing::debug!(worker_id, "結果チャンネルが閉じられたため終了");
                break;
            }
        }

        tracing::debug!(worker_id, processed, "ワーカー終了");
        Ok(processed)
    })
}

/// ワーカープール: 指定数のワーカーを起動する
pub fn spawn_workers<S>(
    worker_count: usize,
    summarizer: Arc<S>,
    chapters: Arc<[Chapter]>,
    jobs: JobReceiver,
    result_tx: mpsc::Sender<ChapterSummary>,
    call_timeout: Option<Duration>,
) -> Vec<tokio::task::JoinHandle<ProcessingResult<usize>>>
where
    S: Summarizer + ?Sized + 'static,
{
    (0..worker_count)
        .map(|worker_id| {
            spawn_worker(
                worker_id,
                summarizer.clone(),
                chapters.clone(),
                jobs.clone(),
                result_tx.clone(),
                call_timeout,
            )
        })
        .collect()
}
