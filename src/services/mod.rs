// サービス層 - 機能別のビジネスロジック
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod monitoring;
pub mod output;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::{DefaultPipelineConfig, DEFAULT_MAX_CONCURRENT};
pub use monitoring::{ConsoleProgressReporter, NoOpProgressReporter};
pub use output::{render_json, render_text, write_report, OutputFormat};
