use crate::cli::Cli;
use crate::client::{OpenAiConfig, OpenAiSummarizer};
use crate::core::{PipelineConfig, ProgressReporter, Summarizer};
use crate::engine::SummaryEngine;
use crate::services::{write_report, ConsoleProgressReporter, DefaultPipelineConfig};
use anyhow::Result;
use std::io::Write;
use std::sync::Arc;

/// Build the pipeline configuration from command line arguments
pub fn pipeline_config_from(args: &Cli) -> DefaultPipelineConfig {
    DefaultPipelineConfig::default()
        .with_max_concurrent(args.max_concurrent)
        .with_call_timeout(args.call_timeout())
}

/// Execute the summarize command against the configured API
pub async fn execute_summarize(args: &Cli) -> Result<()> {
    let client_config = OpenAiConfig::new(&args.token)
        .with_model(&args.model)
        .with_api_base(&args.api_base);
    let summarizer = OpenAiSummarizer::new(client_config)?;

    tracing::info!(
        file = %args.file_path.display(),
        model = %args.model,
        max_concurrent = args.max_concurrent,
        "🚀 要約を開始します"
    );

    let engine = SummaryEngine::new(
        Arc::new(summarizer),
        pipeline_config_from(args),
        Arc::new(ConsoleProgressReporter::new()),
    );

    let report = engine.summarize_file(&args.file_path).await?;
    write_report(&mut std::io::stdout().lock(), &report, args.format)
}

/// Run an engine over the book and write the report in the requested format
pub async fn summarize_to_writer<S, C, R, W>(
    engine: &SummaryEngine<S, C, R>,
    args: &Cli,
    writer: &mut W,
) -> Result<()>
where
    S: Summarizer + ?Sized + 'static,
    C: PipelineConfig,
    R: ProgressReporter + ?Sized + 'static,
    W: Write,
{
    let report = engine.summarize_file(&args.file_path).await?;
    write_report(writer, &report, args.format)
}
