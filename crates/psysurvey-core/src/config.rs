//! Survey configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::report::ReportLabels;

/// Environment variable that overrides [`SurveyConfig::questions_file`].
pub const QUESTIONS_ENV: &str = "PSYSURVEY_QUESTIONS";

/// Top-level psysurvey configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyConfig {
    /// Path of the question file.
    #[serde(default = "default_questions_file")]
    pub questions_file: PathBuf,
    /// Survey title shown above the questions.
    #[serde(default = "default_title")]
    pub title: String,
    /// Label of the "next question" action.
    #[serde(default = "default_next_label")]
    pub next_label: String,
    /// Number of answers a presentation can display per question.
    #[serde(default = "default_max_answers")]
    pub max_answers: usize,
    /// Output directory for exported reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Report strings.
    #[serde(default)]
    pub labels: ReportLabels,
}

fn default_questions_file() -> PathBuf {
    PathBuf::from("psychology_questions.txt")
}
fn default_title() -> String {
    "Опрос по психологии".to_string()
}
fn default_next_label() -> String {
    "Далее".to_string()
}
fn default_max_answers() -> usize {
    5
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./survey-results")
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            questions_file: default_questions_file(),
            title: default_title(),
            next_label: default_next_label(),
            max_answers: default_max_answers(),
            output_dir: default_output_dir(),
            labels: ReportLabels::default(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without an explicit path:
/// 1. `psysurvey.toml` in the current directory
/// 2. `~/.config/psysurvey/config.toml`
///
/// `PSYSURVEY_QUESTIONS` overrides the question file, and `${VAR}`
/// references in paths are expanded.
pub fn load_config_from(path: Option<&Path>) -> Result<SurveyConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("psysurvey.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => SurveyConfig::default(),
    };

    if let Ok(questions) = std::env::var(QUESTIONS_ENV) {
        config.questions_file = PathBuf::from(questions);
    }

    config.questions_file = resolve_path(&config.questions_file);
    config.output_dir = resolve_path(&config.output_dir);

    anyhow::ensure!(config.max_answers >= 1, "max_answers must be at least 1");

    Ok(config)
}

/// Parse a TOML config string.
pub fn parse_config(content: &str) -> Result<SurveyConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("psysurvey"))
}
