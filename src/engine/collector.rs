// Collector - 結果収集と章番号順への整列

use crate::core::{ChapterSummary, ProcessingResult, ProgressReporter, SummaryError};
use std::sync::Arc;
use tokio::sync::mpsc;

/// 章番号の昇順に並べ替える
pub fn order_results(mut results: Vec<ChapterSummary>) -> Vec<ChapterSummary> {
    results.sort_unstable_by_key(|result| result.index);
    results
}

/// ちょうど`expected`件の結果を受信して章番号順に返す
///
/// 受信順は問わない。件数が揃った時点で完了とし、ワーカーの終了は待たない。
/// 範囲外や重複した章番号、途中でのチャンネル終了は内部不整合としてエラーにする。
pub async fn collect_results<R>(
    result_rx: &mut mpsc::Receiver<ChapterSummary>,
    expected: usize,
    reporter: &R,
    report_progress: bool,
) -> ProcessingResult<Vec<ChapterSummary>>
where
    R: ProgressReporter + ?Sized,
{
    let mut results = Vec::with_capacity(expected);
    let mut seen = vec![false; expected];

    while results.len() < expected {
        let result = result_rx.recv().await.ok_or_else(|| {
            SummaryError::channel(format!(
                "結果チャンネルが {}/{expected} 件受信した時点で閉じられました",
                results.len()
            ))
        })?;

        match seen.get_mut(result.index) {
            Some(slot) if !*slot => *slot = true,
            Some(_) => {
                return Err(SummaryError::channel(format!(
                    "章 {} の結果を重複して受信しました",
                    result.index
                )))
            }
            None => {
                return Err(SummaryError::channel(format!(
                    "範囲外の章 {} の結果を受信しました",
                    result.index
                )))
            }
        }

        if let Some(error) = &result.error {
            reporter.report_error(result.index, error).await;
        }
        results.push(result);

        if report_progress {
            reporter.report_progress(results.len(), expected).await;
        }
    }

    Ok(order_results(results))
}

/// Collector: 結果収集タスクを起動
pub fn spawn_result_collector<R>(
    mut result_rx: mpsc::Receiver<ChapterSummary>,
    expected: usize,
    reporter: Arc<R>,
    report_progress: bool,
) -> tokio::task::JoinHandle<ProcessingResult<Vec<ChapterSummary>>>
where
    R: ProgressReporter + ?Sized + 'static,
{
    tokio::spawn(async move {
        collect_results(&mut result_rx, expected, reporter.as_ref(), report_progress).await
    })
}
