//! The `psysurvey validate` command.

use std::path::PathBuf;

use anyhow::Result;

use psysurvey_core::config::load_config_from;
use psysurvey_core::loader;

pub fn execute(questions_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let path = questions_path.unwrap_or_else(|| config.questions_file.clone());

    let content = loader::read_question_file(&path)?;

    let questions = loader::parse_questions(&content);
    println!(
        "Question file: {} ({} questions)",
        path.display(),
        questions.len()
    );

    let warnings = loader::validate_question_file(&content, config.max_answers);
    for w in &warnings {
        let prefix = w
            .line
            .map(|line| format!("  [line {line}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Question file valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
