//! 本を章ごとに分割し、上限付きワーカープールで並列に要約するライブラリ
//!
//! 処理の流れ: テキスト読み込み → 章分割 → JobQueue → ワーカー → Collector → 章番号順の出力

pub mod cli;
pub mod client;
pub mod core;
pub mod engine;
pub mod segmenter;
pub mod services;

#[cfg(test)]
mod test_support;

pub use crate::core::{Chapter, ChapterSummary, Summarizer, SummaryError, SummaryReport};
pub use engine::{create_default_summary_engine, create_quiet_summary_engine, SummaryEngine};
pub use segmenter::split_into_chapters;
