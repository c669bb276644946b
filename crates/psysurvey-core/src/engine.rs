//! Sequential survey engine.
//!
//! A [`Survey`] walks a fixed list of questions with a single cursor. An
//! answer may be submitted (and replaced) any number of times for the
//! current question; its points count once the cursor moves past it.

use serde::Serialize;

use crate::error::SurveyError;
use crate::model::Question;
use crate::report::SurveyReport;

/// Where a survey currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SurveyState {
    /// The question at `cursor` is being presented.
    InProgress { cursor: usize },
    /// Every question has been passed.
    Completed,
}

/// A survey over a fixed set of questions.
#[derive(Debug, Clone)]
pub struct Survey {
    title: String,
    questions: Vec<Question>,
    cursor: usize,
}

impl Survey {
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            questions,
            cursor: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// All questions in presentation order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Index of the current question; equals [`len`](Self::len) once complete.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn state(&self) -> SurveyState {
        if self.is_complete() {
            SurveyState::Completed
        } else {
            SurveyState::InProgress {
                cursor: self.cursor,
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.cursor == self.questions.len()
    }

    /// The question being presented, or `None` once complete.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.cursor)
    }

    /// Record `index` as the answer to the current question.
    ///
    /// Replaces any earlier answer to the same question. Nothing is scored
    /// until [`advance`](Self::advance).
    pub fn submit_answer(&mut self, index: usize) -> Result<(), SurveyError> {
        let question = self
            .questions
            .get_mut(self.cursor)
            .ok_or(SurveyError::AlreadyCompleted)?;

        let available = question.answers().len();
        if index >= available {
            return Err(SurveyError::AnswerOutOfRange { index, available });
        }

        question.set_user_answer(index);
        tracing::debug!(cursor = self.cursor, index, "answer submitted");
        Ok(())
    }

    /// Move past the current question, returning the points it earned.
    ///
    /// An unanswered question earns 0 and stays unanswered in the report.
    pub fn advance(&mut self) -> Result<u32, SurveyError> {
        let question = self
            .questions
            .get(self.cursor)
            .ok_or(SurveyError::AlreadyCompleted)?;

        let awarded = question.earned_points();
        if !question.is_answered() {
            tracing::debug!(cursor = self.cursor, "question left unanswered");
        }
        self.cursor += 1;

        if self.is_complete() {
            tracing::info!(
                questions = self.questions.len(),
                total = self.score_so_far(),
                "survey completed"
            );
        }
        Ok(awarded)
    }

    /// Advance through every remaining question without answering it.
    ///
    /// An answer already submitted for the current question still counts.
    pub fn skip_remaining(&mut self) {
        while !self.is_complete() {
            // Cannot fail: the loop only runs while a current question exists.
            let _ = self.advance();
        }
    }

    /// Points earned by the questions already advanced past.
    pub fn score_so_far(&self) -> u32 {
        self.questions[..self.cursor]
            .iter()
            .map(Question::earned_points)
            .sum()
    }

    /// Build the final report. Only available once complete.
    pub fn report(&self) -> Result<SurveyReport, SurveyError> {
        if !self.is_complete() {
            return Err(SurveyError::NotCompleted {
                remaining: self.questions.len() - self.cursor,
            });
        }
        Ok(SurveyReport::from_questions(&self.title, &self.questions))
    }
}
