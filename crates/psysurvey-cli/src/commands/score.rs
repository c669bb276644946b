//! The `psysurvey score` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use psysurvey_core::config::load_config_from;
use psysurvey_core::engine::Survey;
use psysurvey_core::loader;
use psysurvey_core::session::{ScriptedRespondent, SurveySession};

/// Parse `"2,1,-,3"` into 0-based choices, `-` (or nothing) meaning skip.
fn parse_answers(answers: &str) -> Result<Vec<Option<usize>>> {
    if answers.trim().is_empty() {
        return Ok(Vec::new());
    }

    answers
        .split(',')
        .map(|s| {
            let s = s.trim();
            if s.is_empty() || s == "-" {
                return Ok(None);
            }
            match s.parse::<usize>() {
                Ok(n) if n >= 1 => Ok(Some(n - 1)),
                _ => anyhow::bail!("invalid answer number: '{s}'"),
            }
        })
        .collect()
}

pub fn execute(
    answers: String,
    questions_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    format: String,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let questions_path = questions_path.unwrap_or_else(|| config.questions_file.clone());

    let questions = loader::try_load_questions(&questions_path)?;
    let choices = parse_answers(&answers)?;

    anyhow::ensure!(
        choices.len() <= questions.len(),
        "{} answers given but the survey has {} question(s)",
        choices.len(),
        questions.len()
    );
    for (i, (choice, question)) in choices.iter().zip(&questions).enumerate() {
        if let Some(index) = choice {
            let available = question.answers().len();
            anyhow::ensure!(
                *index < available,
                "question {} has {available} answer(s), got answer {}",
                i + 1,
                index + 1
            );
        }
    }

    let mut session = SurveySession::new(Survey::new(config.title.clone(), questions));
    let report = session
        .run(&mut ScriptedRespondent::new(choices))
        .context("failed to score answers")?;

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", report.to_markdown(&config.labels));
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "text" => {
            println!("{}", report.render_text(&config.labels));
        }
        other => anyhow::bail!("unknown format: '{other}' (expected text, json or markdown)"),
    }

    Ok(())
}
