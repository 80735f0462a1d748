use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::question::Question;

/// Running score: correct answers out of the bank size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    /// Walk `questions` from the start and count correct answers until the
    /// first unanswered question.
    #[must_use]
    pub fn tally(questions: &[Question]) -> Self {
        let correct = questions
            .iter()
            .take_while(|q| q.has_answer())
            .filter(|q| q.is_answered_correctly())
            .count();

        Self {
            correct,
            total: questions.len(),
        }
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Your score is {} out of {}", self.correct, self.total)
    }
}
