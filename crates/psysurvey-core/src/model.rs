//! Core data model types for psysurvey.

use serde::Serialize;

/// A single survey item: prompt text, ordered answers, and positional points.
///
/// Points are derived from answer position (`points[i] == i + 1`) and are
/// never configurable. The only mutable part is the user's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    text: String,
    answers: Vec<String>,
    points: Vec<u32>,
    user_answer: Option<usize>,
}

impl Question {
    /// Create an unanswered question, assigning points `1..=N` to the answers.
    pub fn new(text: impl Into<String>, answers: Vec<String>) -> Self {
        let points = (1..=answers.len() as u32).collect();
        Self {
            text: text.into(),
            answers,
            points,
            user_answer: None,
        }
    }

    /// The prompt text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The answers in file order.
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Points parallel to [`answers`](Self::answers).
    pub fn points(&self) -> &[u32] {
        &self.points
    }

    /// Points for the answer at `index`, if it exists.
    pub fn points_for(&self, index: usize) -> Option<u32> {
        self.points.get(index).copied()
    }

    /// The index of the recorded answer, if any.
    pub fn user_answer(&self) -> Option<usize> {
        self.user_answer
    }

    /// The text of the recorded answer, if any.
    pub fn chosen_answer(&self) -> Option<&str> {
        self.user_answer
            .and_then(|i| self.answers.get(i))
            .map(String::as_str)
    }

    /// Points earned by the recorded answer, 0 when unanswered.
    pub fn earned_points(&self) -> u32 {
        self.user_answer
            .and_then(|i| self.points_for(i))
            .unwrap_or(0)
    }

    pub fn is_answered(&self) -> bool {
        self.user_answer.is_some()
    }

    /// Record an answer. Bounds are checked by the engine.
    pub(crate) fn set_user_answer(&mut self, index: usize) {
        debug_assert!(index < self.answers.len());
        self.user_answer = Some(index);
    }
}
