//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::{Context, Result};
use std::path::Path;

use psysurvey_core::report::{ReportEntry, ReportLabels, SurveyReport};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page from a finished survey report.
pub fn generate_html(report: &SurveyReport, labels: &ReportLabels) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>{} — {}</title>\n",
        html_escape(&report.title),
        html_escape(labels.heading.trim_end_matches(':'))
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(&report.title)));
    html.push_str(&format!(
        "<p class=\"meta\">{} / {} | {}</p>\n",
        report.answered_count(),
        report.entries.len(),
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Per-question results
    html.push_str("<section class=\"results\">\n");
    html.push_str(&format!("<h2>{}</h2>\n", html_escape(&labels.heading)));
    html.push_str("<table class=\"results-table\">\n");
    html.push_str(&format!(
        "<thead><tr><th>#</th><th></th><th>{}</th><th>{}</th><th></th></tr></thead>\n",
        html_escape(labels.your_answer.trim_end_matches(':')),
        html_escape(labels.points_for_answer.trim_end_matches(':')),
    ));
    html.push_str("<tbody>\n");

    for (i, entry) in report.entries.iter().enumerate() {
        let (row_class, answer_text) = match &entry.answer {
            Some(answer) => ("answered", html_escape(answer)),
            None => ("unanswered", html_escape(&labels.unanswered)),
        };

        html.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{} / {}</td><td>{}</td></tr>\n",
            row_class,
            i + 1,
            html_escape(&entry.question),
            answer_text,
            entry.points,
            entry.max_points,
            points_bar(entry),
        ));
    }

    html.push_str("</tbody></table>\n");
    html.push_str(&format!(
        "<p class=\"total\">{} <strong>{}</strong></p>\n",
        html_escape(&labels.total),
        report.total_points
    ));
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>JSON</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(
        &serde_json::to_string_pretty(report).unwrap_or_default(),
    ));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &SurveyReport, labels: &ReportLabels, path: &Path) -> Result<()> {
    let html = generate_html(report, labels);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write HTML report to {}", path.display()))?;
    Ok(())
}

/// Inline SVG bar of `points` out of `max_points`.
fn points_bar(entry: &ReportEntry) -> String {
    let max_width = 200;
    let height = 14;

    let ratio = if entry.max_points == 0 {
        0.0
    } else {
        entry.points as f64 / entry.max_points as f64
    };
    let width = (ratio * max_width as f64) as usize;

    format!(
        "<svg width=\"{max_width}\" height=\"{height}\" xmlns=\"http://www.w3.org/2000/svg\">\
         <rect x=\"0\" y=\"0\" width=\"{max_width}\" height=\"{height}\" fill=\"var(--border)\" rx=\"3\"/>\
         <rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" fill=\"#6366f1\" rx=\"3\"/>\
         </svg>"
    )
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --muted: #f3f4f6; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --muted: #1f2937; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; vertical-align: middle; }
th { background: var(--border); }
.unanswered { background: var(--muted); font-style: italic; }
.total { font-size: 1.25rem; }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
"#;
