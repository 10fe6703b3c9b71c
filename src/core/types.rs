// 要約処理に関連するデータ型定義

use serde::Serialize;

/// 要約に失敗した章に入れる固定テキスト
pub const PLACEHOLDER_SUMMARY: &str = "cannot summarize this chapter";

/// 分割済みの章
///
/// 分割後は不変で、全ワーカーから読み取り専用で共有される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    /// 0始まりの章番号
    pub index: usize,
    /// 見出し行を含む章本文
    pub text: String,
}

impl Chapter {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// 章テキストの列から番号付きの章リストを作る
    pub fn from_texts(texts: Vec<String>) -> Vec<Chapter> {
        texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| Chapter { index, text })
            .collect()
    }
}

/// 章ごとの処理結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterSummary {
    #[serde(rename = "chapter")]
    pub index: usize,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChapterSummary {
    pub fn success(index: usize, summary: impl Into<String>) -> Self {
        Self {
            index,
            summary: summary.into(),
            error: None,
        }
    }

    /// 失敗結果（要約テキストはプレースホルダー）
    pub fn failure(index: usize, error: impl Into<String>) -> Self {
        Self {
            index,
            summary: PLACEHOLDER_SUMMARY.to_string(),
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// 実行全体のレポート
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    /// 章番号の昇順に並んだ結果
    pub chapters: Vec<ChapterSummary>,
    pub total_chapters: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub worker_count: usize,
    pub elapsed_ms: u64,
}

impl SummaryReport {
    /// 並べ替え済みの結果から集計値を計算してレポートを作る
    pub fn new(chapters: Vec<ChapterSummary>, worker_count: usize, elapsed_ms: u64) -> Self {
        let succeeded = chapters.iter().filter(|c| c.is_success()).count();
        let total_chapters = chapters.len();
        Self {
            failed: total_chapters - succeeded,
            chapters,
            total_chapters,
            succeeded,
            worker_count,
            elapsed_ms,
        }
    }

    /// 空の入力に対するレポート
    pub fn empty(worker_count: usize) -> Self {
        Self::new(Vec::new(), worker_count, 0)
    }

    pub fn summaries(&self) -> impl Iterator<Item = &str> {
        self.chapters.iter().map(|c| c.summary.as_str())
    }
}
