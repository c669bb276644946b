//! Selection session: the adapter between a presentation layer and a survey.
//!
//! The presentation holds at most one selected answer for the current
//! question. It may change that selection freely; the survey only sees it
//! when the user moves on with [`SurveySession::next`].

use anyhow::Result;

use crate::engine::Survey;
use crate::error::SurveyError;
use crate::model::Question;
use crate::report::SurveyReport;

/// What a presentation needs to render the current question.
#[derive(Debug, Clone, Copy)]
pub struct QuestionPrompt<'a> {
    /// 1-based position of the question.
    pub number: usize,
    pub total: usize,
    pub question: &'a Question,
    /// The currently selected answer, if any.
    pub selected: Option<usize>,
}

/// A respondent's decision for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Answer with the given 0-based index.
    Answer(usize),
    /// Move on without answering.
    Skip,
    /// Stop here; the remaining questions stay unanswered.
    Quit,
}

/// Something that answers survey questions one at a time.
pub trait Respondent {
    fn choose(&mut self, prompt: &QuestionPrompt<'_>) -> Result<Choice>;
}

/// A respondent that replays a fixed list of choices.
///
/// `None` entries skip a question. When the list runs out, the remaining
/// questions are skipped too.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRespondent {
    choices: std::vec::IntoIter<Option<usize>>,
}

impl ScriptedRespondent {
    pub fn new(choices: Vec<Option<usize>>) -> Self {
        Self {
            choices: choices.into_iter(),
        }
    }

    /// Choices that were never consumed.
    pub fn remaining(&self) -> usize {
        self.choices.len()
    }
}

impl Respondent for ScriptedRespondent {
    fn choose(&mut self, _prompt: &QuestionPrompt<'_>) -> Result<Choice> {
        Ok(match self.choices.next() {
            Some(Some(index)) => Choice::Answer(index),
            Some(None) => Choice::Skip,
            None => Choice::Quit,
        })
    }
}

/// A survey plus the presentation's current selection.
#[derive(Debug, Clone)]
pub struct SurveySession {
    survey: Survey,
    selected: Option<usize>,
}

impl SurveySession {
    pub fn new(survey: Survey) -> Self {
        Self {
            survey,
            selected: None,
        }
    }

    pub fn survey(&self) -> &Survey {
        &self.survey
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The prompt for the current question, or `None` once complete.
    pub fn prompt(&self) -> Option<QuestionPrompt<'_>> {
        self.survey.current_question().map(|question| QuestionPrompt {
            number: self.survey.cursor() + 1,
            total: self.survey.len(),
            question,
            selected: self.selected,
        })
    }

    /// Select an answer for the current question, replacing any previous one.
    pub fn select(&mut self, index: usize) -> Result<(), SurveyError> {
        let question = self
            .survey
            .current_question()
            .ok_or(SurveyError::AlreadyCompleted)?;
        let available = question.answers().len();
        if index >= available {
            return Err(SurveyError::AnswerOutOfRange { index, available });
        }
        self.selected = Some(index);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Whether moving on is allowed: an answer is selected and questions remain.
    pub fn can_advance(&self) -> bool {
        self.selected.is_some() && !self.survey.is_complete()
    }

    /// Submit the selection and move to the next question.
    ///
    /// Returns the points earned by the question just left.
    pub fn next(&mut self) -> Result<u32, SurveyError> {
        if self.survey.is_complete() {
            return Err(SurveyError::AlreadyCompleted);
        }
        let index = self.selected.ok_or(SurveyError::NoSelection)?;
        self.survey.submit_answer(index)?;
        let awarded = self.survey.advance()?;
        self.selected = None;
        Ok(awarded)
    }

    /// Leave the remaining questions unanswered. A pending selection is dropped.
    pub fn finish_early(&mut self) {
        self.selected = None;
        self.survey.skip_remaining();
    }

    pub fn is_complete(&self) -> bool {
        self.survey.is_complete()
    }

    pub fn report(&self) -> Result<SurveyReport, SurveyError> {
        self.survey.report()
    }

    /// Drive the session to completion with `respondent`.
    pub fn run(&mut self, respondent: &mut dyn Respondent) -> Result<SurveyReport> {
        while let Some(prompt) = self.prompt() {
            match respondent.choose(&prompt)? {
                Choice::Answer(index) => {
                    self.select(index)?;
                    self.next()?;
                }
                Choice::Skip => {
                    self.selected = None;
                    self.survey.advance()?;
                }
                Choice::Quit => {
                    tracing::info!(
                        remaining = self.survey.len() - self.survey.cursor(),
                        "survey finished early"
                    );
                    self.finish_early();
                }
            }
        }
        Ok(self.report()?)
    }
}
