use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("a question needs at least two options, got {len}")]
    TooFewOptions { len: usize },

    #[error("correct index {correct} is out of range for {len} options")]
    CorrectIndexOutOfRange { correct: usize, len: usize },
}

/// One multiple-choice question with its answer key.
///
/// Immutable once built; the bank is an ordered list of these, identical for
/// every session, supplied by the composition root at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
}

impl Question {
    /// Build a question, validating the option list against the answer key.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::TooFewOptions` for fewer than two options and
    /// `QuestionError::CorrectIndexOutOfRange` when the key points outside
    /// the option list.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
    ) -> Result<Self, QuestionError> {
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions { len: options.len() });
        }
        if correct_index >= options.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                correct: correct_index,
                len: options.len(),
            });
        }

        Ok(Self {
            prompt: prompt.into(),
            options,
            correct_index,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// True if the given option index is a valid selection for this question.
    #[must_use]
    pub fn accepts_option(&self, option: usize) -> bool {
        option < self.options.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("option {i}")).collect()
    }

    #[test]
    fn builds_with_valid_key() {
        let q = Question::new("prompt", options(4), 2).unwrap();
        assert_eq!(q.options().len(), 4);
        assert_eq!(q.correct_index(), 2);
        assert!(q.accepts_option(3));
        assert!(!q.accepts_option(4));
    }

    #[test]
    fn rejects_single_option() {
        let err = Question::new("prompt", options(1), 0).unwrap_err();
        assert!(matches!(err, QuestionError::TooFewOptions { len: 1 }));
    }

    #[test]
    fn rejects_key_outside_options() {
        let err = Question::new("prompt", options(3), 3).unwrap_err();
        assert!(matches!(
            err,
            QuestionError::CorrectIndexOutOfRange { correct: 3, len: 3 }
        ));
    }
}
