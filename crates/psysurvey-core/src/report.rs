//! Survey report types with text, markdown, and JSON output.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Question;

/// The end-of-survey summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Survey title.
    pub title: String,
    /// One entry per question, in presentation order.
    pub entries: Vec<ReportEntry>,
    /// Sum of the entries' points.
    pub total_points: u32,
}

/// The outcome of a single question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    pub question: String,
    /// Chosen answer text, `None` when unanswered.
    pub answer: Option<String>,
    pub answer_index: Option<usize>,
    pub points: u32,
    /// Points of the last answer, the most this question could earn.
    pub max_points: u32,
}

/// Literal strings used when rendering a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportLabels {
    pub heading: String,
    pub your_answer: String,
    pub points_for_answer: String,
    pub unanswered: String,
    pub total: String,
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self {
            heading: "Результаты опроса:".into(),
            your_answer: "Ваш ответ:".into(),
            points_for_answer: "Баллы за ответ:".into(),
            unanswered: "Вы не ответили на этот вопрос".into(),
            total: "Итоговые баллы:".into(),
        }
    }
}

impl SurveyReport {
    /// Snapshot the answers of `questions`. The total is summed from them.
    pub(crate) fn from_questions(title: &str, questions: &[Question]) -> Self {
        let entries: Vec<ReportEntry> = questions
            .iter()
            .map(|q| ReportEntry {
                question: q.text().to_string(),
                answer: q.chosen_answer().map(str::to_string),
                answer_index: q.user_answer(),
                points: q.earned_points(),
                max_points: q.points().last().copied().unwrap_or(0),
            })
            .collect();
        let total_points = entries.iter().map(|e| e.points).sum();

        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            title: title.to_string(),
            entries,
            total_points,
        }
    }

    pub fn answered_count(&self) -> usize {
        self.entries.iter().filter(|e| e.answer.is_some()).count()
    }

    /// Render the plain-text results listing.
    pub fn render_text(&self, labels: &ReportLabels) -> String {
        let mut out = format!("{}\n\n", labels.heading);

        for entry in &self.entries {
            out.push_str(&entry.question);
            out.push('\n');
            match &entry.answer {
                Some(answer) => {
                    out.push_str(&format!("{} {}\n", labels.your_answer, answer));
                    out.push_str(&format!(
                        "{} {}\n\n",
                        labels.points_for_answer, entry.points
                    ));
                }
                None => {
                    out.push_str(&labels.unanswered);
                    out.push_str("\n\n");
                }
            }
        }

        out.push_str(&format!("{} {}", labels.total, self.total_points));
        out
    }

    /// Format the report as a markdown table.
    pub fn to_markdown(&self, labels: &ReportLabels) -> String {
        let mut md = format!("## {}\n\n", self.title);

        if !self.entries.is_empty() {
            md.push_str(&format!(
                "| # | Question | {} | {} |\n",
                labels.your_answer.trim_end_matches(':'),
                labels.points_for_answer.trim_end_matches(':')
            ));
            md.push_str("|---|----------|--------|--------|\n");
            for (i, entry) in self.entries.iter().enumerate() {
                let answer = entry.answer.as_deref().unwrap_or(&labels.unanswered);
                md.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    i + 1,
                    escape_cell(&entry.question),
                    escape_cell(answer),
                    entry.points
                ));
            }
            md.push('\n');
        }

        md.push_str(&format!("**{}** {}\n", labels.total, self.total_points));
        md
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SurveyReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}
