// 要約クライアント層
// Summarizerトレイトの具象実装を提供

pub mod openai;

// 公開API
pub use openai::{OpenAiConfig, OpenAiSummarizer};
