pub mod init;
pub mod score;
pub mod take;
pub mod validate;

use std::path::Path;

use anyhow::Result;

use psysurvey_core::report::{ReportLabels, SurveyReport};
use psysurvey_report::html::write_html_report;

/// A file format `take` can export a report to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExportFormat {
    Json,
    Html,
}

/// Parse a `--format` value such as `json,html` or `all`.
///
/// `text` produces no file; the text report is always printed.
pub(crate) fn parse_export_formats(format: &str) -> Result<Vec<ExportFormat>> {
    if format.trim() == "all" {
        return Ok(vec![ExportFormat::Json, ExportFormat::Html]);
    }

    let mut formats = Vec::new();
    for fmt in format.split(',').map(str::trim) {
        let parsed = match fmt {
            "text" => continue,
            "json" => ExportFormat::Json,
            "html" => ExportFormat::Html,
            _ => anyhow::bail!("unknown format: '{fmt}' (expected text, json, html or all)"),
        };
        if !formats.contains(&parsed) {
            formats.push(parsed);
        }
    }
    Ok(formats)
}

/// Write `report` into `output` once per format.
pub(crate) fn write_reports(
    report: &SurveyReport,
    labels: &ReportLabels,
    output: &Path,
    formats: &[ExportFormat],
) -> Result<()> {
    let timestamp = report.created_at.format("%Y-%m-%dT%H%M%S");

    for fmt in formats {
        match fmt {
            ExportFormat::Json => {
                let path = output.join(format!("report-{timestamp}.json"));
                report.save_json(&path)?;
                eprintln!("Results saved to: {}", path.display());
            }
            ExportFormat::Html => {
                let path = output.join(format!("report-{timestamp}.html"));
                write_html_report(report, labels, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
        }
    }

    Ok(())
}

/// Print a per-question summary table to stderr.
pub(crate) fn print_summary(report: &SurveyReport, labels: &ReportLabels) {
    use comfy_table::{Cell, Table};

    if report.entries.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Answer", "Points"]);

    for (i, entry) in report.entries.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&entry.question),
            Cell::new(entry.answer.as_deref().unwrap_or("-")),
            Cell::new(format!("{}/{}", entry.points, entry.max_points)),
        ]);
    }
    table.add_row(vec![
        Cell::new(""),
        Cell::new(&labels.total),
        Cell::new(format!("{}/{}", report.answered_count(), report.entries.len())),
        Cell::new(report.total_points),
    ]);

    eprintln!("\n{table}");
}
