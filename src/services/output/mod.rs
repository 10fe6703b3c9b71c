// 出力整形機能
// 章番号順に並んだレポートをテキストまたはJSONに整形する

use crate::core::SummaryReport;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// 出力形式
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// 章ごとに要約ブロックと空行を出力
    #[default]
    Text,
    /// レポート全体を1つのJSONドキュメントとして出力
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    report: &'a SummaryReport,
}

/// テキスト形式: 各章の要約の後に空行を1つ置く
pub fn render_text(report: &SummaryReport) -> String {
    report
        .summaries()
        .map(|summary| format!("{summary}\n\n"))
        .collect()
}

pub fn render_json(report: &SummaryReport) -> Result<String> {
    let document = JsonReport {
        generated_at: Utc::now(),
        report,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// 指定形式でレポートを書き出す
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &SummaryReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => writer.write_all(render_text(report).as_bytes())?,
        OutputFormat::Json => writeln!(writer, "{}", render_json(report)?)?,
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ChapterSummary, PLACEHOLDER_SUMMARY};

    fn sample_report() -> SummaryReport {
        SummaryReport::new(
            vec![
                ChapterSummary::success(0, "<24 chars>"),
                ChapterSummary::failure(1, "502 Bad Gateway"),
            ],
            5,
            10,
        )
    }

    #[test]
    fn test_render_text_blocks_in_order() {
        let text = render_text(&sample_report());

        assert_eq!(text, format!("<24 chars>\n\n{PLACEHOLDER_SUMMARY}\n\n"));
    }

    #[test]
    fn test_render_text_empty_report() {
        assert_eq!(render_text(&SummaryReport::empty(5)), "");
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value["generated_at"].is_string());
        assert_eq!(value["total_chapters"], 2);
        assert_eq!(value["failed"], 1);
        assert_eq!(value["chapters"][0]["chapter"], 0);
        assert_eq!(value["chapters"][1]["error"], "502 Bad Gateway");
    }

    #[test]
    fn test_write_report_to_buffer() {
        let mut buffer = Vec::new();
        write_report(&mut buffer, &sample_report(), OutputFormat::Text).unwrap();

        let written = String::from_utf8(buffer).unwrap();
        assert!(written.starts_with("<24 chars>\n\n"));
    }
}
