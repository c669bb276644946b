//! Survey error types.
//!
//! Contract violations against the survey engine and strict question file
//! reads surface as [`SurveyError`]. Application code wraps these in
//! `anyhow` with context.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or driving a survey.
#[derive(Debug, Error)]
pub enum SurveyError {
    /// The question file could not be read.
    #[error("failed to read question file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An answer index outside the current question's answers was submitted.
    #[error("answer index {index} out of range, question has {available} answer(s)")]
    AnswerOutOfRange { index: usize, available: usize },

    /// The survey has no current question left.
    #[error("survey already completed")]
    AlreadyCompleted,

    /// A report was requested before every question was passed.
    #[error("survey not completed, {remaining} question(s) remaining")]
    NotCompleted { remaining: usize },

    /// Advancing was requested without a selected answer.
    #[error("no answer selected")]
    NoSelection,
}

impl SurveyError {
    /// Returns `true` if this error is a misuse of the engine by its caller
    /// rather than an environmental failure.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, SurveyError::Read { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = SurveyError::AnswerOutOfRange {
            index: 7,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "answer index 7 out of range, question has 3 answer(s)"
        );
        assert_eq!(
            SurveyError::NotCompleted { remaining: 2 }.to_string(),
            "survey not completed, 2 question(s) remaining"
        );
    }

    #[test]
    fn read_errors_are_not_contract_violations() {
        let err = SurveyError::Read {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(!err.is_contract_violation());
        assert!(err.to_string().contains("missing.txt"));
        assert!(SurveyError::AlreadyCompleted.is_contract_violation());
        assert!(SurveyError::NoSelection.is_contract_violation());
    }
}
