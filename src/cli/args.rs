use crate::client::openai::{DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::services::{OutputFormat, DEFAULT_MAX_CONCURRENT};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "book_summary")]
#[command(about = "Summarize a plain-text book chapter by chapter with a bounded worker pool")]
#[command(version)]
pub struct Cli {
    /// Path to the plain-text book
    #[arg(short, long)]
    pub file_path: PathBuf,

    /// API token for the summarization service
    #[arg(short, long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub token: String,

    /// Maximum number of chapters summarized concurrently
    #[arg(short, long, default_value_t = DEFAULT_MAX_CONCURRENT)]
    pub max_concurrent: usize,

    /// Chat completion model
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the chat completion API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Per-chapter request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn call_timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// RUST_LOG未指定時のログフィルタ
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "book_summary=debug"
        } else {
            "book_summary=info"
        }
    }
}
