//! psysurvey CLI — console front end for the psychology survey.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod console;

#[derive(Parser)]
#[command(name = "psysurvey", version, about = "Multiple-choice psychology survey")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the survey interactively
    Take {
        /// Question file (overrides the config)
        #[arg(long)]
        questions: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output directory for exported reports (overrides the config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output formats, comma-separated: text, json, html, or all
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Score a fixed list of answers without prompting
    Score {
        /// 1-based answer numbers, comma-separated; "-" skips a question
        #[arg(long, allow_hyphen_values = true)]
        answers: String,

        /// Question file (overrides the config)
        #[arg(long)]
        questions: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Check a question file for malformed or surprising lines
    Validate {
        /// Question file (overrides the config)
        #[arg(long)]
        questions: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and sample question file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("psysurvey=info".parse().expect("static directive")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Take {
            questions,
            config,
            output,
            format,
        } => commands::take::execute(questions, config, output, format),
        Commands::Score {
            answers,
            questions,
            config,
            format,
        } => commands::score::execute(answers, questions, config, format),
        Commands::Validate { questions, config } => commands::validate::execute(questions, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
