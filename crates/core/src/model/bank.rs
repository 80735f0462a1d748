use thiserror::Error;

use crate::model::{
    ids::QuestionId,
    prompt::Prompt,
    question::Question,
    score::Score,
};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank cannot be empty")]
    Empty,

    #[error("question index {index} is out of range for a bank of {len}")]
    OutOfRange { index: usize, len: usize },
}

/// Resource keys of the built-in geography questions.
pub mod geography_keys {
    pub const AUSTRALIA: &str = "question_australia";
    pub const OCEANS: &str = "question_oceans";
    pub const MIDEAST: &str = "question_mideast";
    pub const AFRICA: &str = "question_africa";
    pub const AMERICAS: &str = "question_americas";
    pub const ASIA: &str = "question_asia";
}

//
// ─── BANK ──────────────────────────────────────────────────────────────────────
//

/// Ordered, fixed-size set of questions.
///
/// The bank is never empty, so modular navigation over it is always defined.
/// Questions are created once and only change when an answer is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from `(prompt, answer)` pairs, in order.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Empty` if no questions are given.
    pub fn new<P>(entries: impl IntoIterator<Item = (P, bool)>) -> Result<Self, BankError>
    where
        P: Into<Prompt>,
    {
        let questions: Vec<Question> = entries
            .into_iter()
            .enumerate()
            .map(|(index, (prompt, answer))| {
                Question::new(QuestionId::from_index(index), prompt.into(), answer)
            })
            .collect();

        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        Ok(Self { questions })
    }

    /// The six built-in geography questions.
    #[must_use]
    pub fn geography() -> Self {
        use self::geography_keys::{AFRICA, AMERICAS, ASIA, AUSTRALIA, MIDEAST, OCEANS};

        let questions = [
            (AUSTRALIA, true),
            (OCEANS, true),
            (MIDEAST, false),
            (AFRICA, false),
            (AMERICAS, true),
            (ASIA, true),
        ]
        .into_iter()
        .enumerate()
        .map(|(index, (key, answer))| {
            Question::new(QuestionId::from_index(index), Prompt::new(key), answer)
        })
        .collect();

        Self { questions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed bank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Fetch the question at `index`.
    ///
    /// # Errors
    ///
    /// Returns `BankError::OutOfRange` if `index >= len()`.
    pub fn question(&self, index: usize) -> Result<&Question, BankError> {
        self.questions.get(index).ok_or(BankError::OutOfRange {
            index,
            len: self.questions.len(),
        })
    }

    /// Record an answer on the question at `index`, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns `BankError::OutOfRange` if `index >= len()`.
    pub fn record_answer(&mut self, index: usize, value: bool) -> Result<&Question, BankError> {
        let len = self.questions.len();
        let question = self
            .questions
            .get_mut(index)
            .ok_or(BankError::OutOfRange { index, len })?;
        question.record_answer(value);
        Ok(&*question)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Score over the contiguous answered prefix of the bank.
    #[must_use]
    pub fn score(&self) -> Score {
        Score::tally(&self.questions)
    }
}
