use book_summary::cli::{execute_summarize, Cli};
use book_summary::core::{ErrorSeverity, SummaryError};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // stdoutは要約専用、ログはstderrへ
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_directive())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(error) = execute_summarize(&cli).await {
        let severity = error
            .downcast_ref::<SummaryError>()
            .map_or(ErrorSeverity::High, SummaryError::severity);
        // ログフィルタに関係なく致命的エラーは必ず表示する
        eprintln!("❌ エラー: {error:#}");
        tracing::debug!(severity = severity.as_str(), "異常終了");
        std::process::exit(1);
    }
}
