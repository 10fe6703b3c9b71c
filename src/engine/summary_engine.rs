// SummaryEngine - 依存性注入による要約エンジン
// 要約クライアント・設定・進捗報告は全てコンストラクタで注入される

use super::pipeline::SummaryPipeline;
use crate::core::{
    PipelineConfig, ProcessingResult, ProgressReporter, Summarizer, SummaryError, SummaryReport,
};
use crate::segmenter::ChapterSegmenter;
use std::path::Path;
use std::sync::Arc;

/// 要約エンジン
///
/// ファイル読み込み → 章分割 → 並列要約 → 章番号順のレポート、までを管理する。
/// 並列ワーカーと共有される依存関係はArcで保持する。
pub struct SummaryEngine<S: ?Sized, C, R: ?Sized> {
    summarizer: Arc<S>,
    config: C,
    reporter: Arc<R>,
    segmenter: ChapterSegmenter,
}

impl<S, C, R> SummaryEngine<S, C, R>
where
    S: Summarizer + ?Sized + 'static,
    C: PipelineConfig,
    R: ProgressReporter + ?Sized + 'static,
{
    pub fn new(summarizer: Arc<S>, config: C, reporter: Arc<R>) -> Self {
        Self {
            summarizer,
            config,
            reporter,
            segmenter: ChapterSegmenter::new(),
        }
    }

    /// ファイルを読み込んで要約する
    ///
    /// 読み込みに失敗した場合は章の処理を始める前にエラーを返す。
    pub async fn summarize_file(&self, path: impl AsRef<Path>) -> ProcessingResult<SummaryReport> {
        let path = path.as_ref();
        self.validate_config()?;

        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| SummaryError::file_access(path, e))?;
        tracing::info!(path = %path.display(), bytes = text.len(), "📂 ファイル読み込み完了");

        self.summarize_text(&text).await
    }

    /// テキストを章に分割して要約する
    pub async fn summarize_text(&self, text: &str) -> ProcessingResult<SummaryReport> {
        let chapters = self.segmenter.split(text);
        tracing::info!(chapters = chapters.len(), "📖 章分割完了");

        self.summarize_chapters(chapters).await
    }

    /// 分割済みの章テキストを要約する
    pub async fn summarize_chapters(&self, chapters: Vec<String>) -> ProcessingResult<SummaryReport> {
        self.validate_config()?;

        let pipeline = SummaryPipeline::new(self.summarizer.clone());
        pipeline
            .execute(chapters, &self.config, self.reporter.clone())
            .await
    }

    fn validate_config(&self) -> ProcessingResult<()> {
        if self.config.max_concurrent_tasks() == 0 {
            return Err(SummaryError::configuration("ワーカー数は1以上である必要があります"));
        }
        Ok(())
    }

    /// 設定への参照を取得
    pub fn config(&self) -> &C {
        &self.config
    }

    /// レポーターへの参照を取得
    pub fn reporter(&self) -> &R {
        self.reporter.as_ref()
    }
}
