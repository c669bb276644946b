//! Line-oriented console presentation of a survey.
//!
//! Typing a number selects that answer (and may be repeated to change it),
//! an empty line moves on once something is selected, and `q` or end of
//! input leaves the remaining questions unanswered.

use std::io::{BufRead, Write};

use anyhow::Result;

use psysurvey_core::report::SurveyReport;
use psysurvey_core::session::SurveySession;

/// What one line of input asks for.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Next,
    Quit,
    Select(usize),
    Invalid,
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Next;
    }
    if line.eq_ignore_ascii_case("q") {
        return Input::Quit;
    }
    match line.parse::<usize>() {
        Ok(n) if n >= 1 => Input::Select(n - 1),
        _ => Input::Invalid,
    }
}

pub struct Console<'a, R, W> {
    input: R,
    output: W,
    next_label: &'a str,
    max_answers: usize,
    /// Last question number warned about hidden answers.
    warned_hidden: Option<usize>,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(input: R, output: W, next_label: &'a str, max_answers: usize) -> Self {
        Self {
            input,
            output,
            next_label,
            max_answers,
            warned_hidden: None,
        }
    }

    /// Present every question of `session` and return the final report.
    pub fn run(&mut self, mut session: SurveySession) -> Result<SurveyReport> {
        let mut line = String::new();

        while !session.is_complete() {
            self.render(&session)?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                session.finish_early();
                break;
            }

            match parse_input(&line) {
                Input::Next => {
                    if session.can_advance() {
                        session.next()?;
                    } else {
                        writeln!(self.output, "Select an answer first.")?;
                    }
                }
                Input::Quit => session.finish_early(),
                Input::Select(index) if index < self.visible_answers(&session) => {
                    session.select(index)?;
                }
                Input::Select(_) | Input::Invalid => {
                    writeln!(
                        self.output,
                        "Enter a number from 1 to {}.",
                        self.visible_answers(&session)
                    )?;
                }
            }
        }

        writeln!(self.output)?;
        self.output.flush()?;
        Ok(session.report()?)
    }

    fn visible_answers(&self, session: &SurveySession) -> usize {
        session
            .prompt()
            .map_or(0, |p| p.question.answers().len().min(self.max_answers))
    }

    /// Returns true the first time `number` is seen with hidden answers.
    fn note_hidden_answers(&mut self, number: usize, answer_count: usize) -> bool {
        if answer_count <= self.max_answers || self.warned_hidden == Some(number) {
            return false;
        }
        self.warned_hidden = Some(number);
        true
    }

    fn render(&mut self, session: &SurveySession) -> Result<()> {
        let Some(prompt) = session.prompt() else {
            return Ok(());
        };
        let answers = prompt.question.answers();
        if self.note_hidden_answers(prompt.number, answers.len()) {
            tracing::warn!(
                question = prompt.number,
                hidden = answers.len() - self.max_answers,
                "question has more answers than can be shown"
            );
        }

        writeln!(
            self.output,
            "\n== {} ({}/{}) ==",
            session.survey().title(),
            prompt.number,
            prompt.total
        )?;
        writeln!(self.output, "{}", prompt.question.text())?;
        for (i, answer) in answers.iter().take(self.max_answers).enumerate() {
            let mark = if prompt.selected == Some(i) { 'x' } else { ' ' };
            writeln!(self.output, "  [{mark}] {}) {answer}", i + 1)?;
        }
        let next_hint = if session.can_advance() {
            format!("empty line for \"{}\"", self.next_label)
        } else {
            "select an answer".to_string()
        };
        write!(self.output, "Answer number, {next_hint}, or q to finish: ")?;
        self.output.flush()?;
        Ok(())
    }
}
