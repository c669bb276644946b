//! The `psysurvey take` command.

use std::io;
use std::path::PathBuf;

use anyhow::Result;

use psysurvey_core::config::load_config_from;
use psysurvey_core::engine::Survey;
use psysurvey_core::loader;
use psysurvey_core::session::SurveySession;

use crate::console::Console;

pub fn execute(
    questions_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    output: Option<PathBuf>,
    format: String,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let questions_path = questions_path.unwrap_or_else(|| config.questions_file.clone());
    let output = output.unwrap_or_else(|| config.output_dir.clone());
    let formats = super::parse_export_formats(&format)?;

    // An unreadable file is logged and leaves an empty, already finished survey.
    let questions = loader::load_questions(&questions_path);
    let session = SurveySession::new(Survey::new(config.title.clone(), questions));

    let report = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut console = Console::new(
            stdin.lock(),
            stdout.lock(),
            &config.next_label,
            config.max_answers,
        );
        console.run(session)?
    };

    println!("{}", report.render_text(&config.labels));
    super::print_summary(&report, &config.labels);
    super::write_reports(&report, &config.labels, &output, &formats)?;

    Ok(())
}
