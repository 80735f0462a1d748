use serde::{Deserialize, Serialize};

use crate::model::{
    bank::{BankError, QuestionBank},
    cheat::CheatQuota,
    question::{AnswerOutcome, Question},
};
use crate::navigation::{next_index, normalize_index, prev_index};

/// The two values that survive a screen rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedQuizState {
    pub current_index: usize,
    pub cheats_used: u32,
}

/// Navigation and cheat state for one quiz session.
///
/// Holds no questions itself; operations take the bank by reference, which
/// keeps this struct independent from how questions are presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    current_index: usize,
    quota: CheatQuota,
    is_cheater: bool,
}

impl SessionState {
    #[must_use]
    pub fn new(quota: CheatQuota) -> Self {
        Self {
            current_index: 0,
            quota,
            is_cheater: false,
        }
    }

    /// Start at `index`, wrapped into the bank.
    #[must_use]
    pub fn starting_at(quota: CheatQuota, index: usize, bank: &QuestionBank) -> Self {
        Self {
            current_index: normalize_index(index, bank.len()),
            quota,
            is_cheater: false,
        }
    }

    /// Rebuild state after a rotation. The cheat flag is not part of the
    /// saved bundle and starts cleared.
    #[must_use]
    pub fn from_saved(saved: SavedQuizState, cheats_allowed: u32, bank: &QuestionBank) -> Self {
        Self::starting_at(
            CheatQuota::restore(cheats_allowed, saved.cheats_used),
            saved.current_index,
            bank,
        )
    }

    #[must_use]
    pub fn saved(&self) -> SavedQuizState {
        SavedQuizState {
            current_index: self.current_index,
            cheats_used: self.quota.used(),
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn quota(&self) -> CheatQuota {
        self.quota
    }

    #[must_use]
    pub fn is_cheater(&self) -> bool {
        self.is_cheater
    }

    #[must_use]
    pub fn can_cheat(&self) -> bool {
        !self.quota.is_exhausted()
    }

    /// # Errors
    ///
    /// Returns `BankError::OutOfRange` if this state was built for a larger bank.
    pub fn current_question<'a>(&self, bank: &'a QuestionBank) -> Result<&'a Question, BankError> {
        bank.question(self.current_index)
    }

    /// Move to the next question, wrapping at the end.
    pub fn advance(&mut self, bank: &QuestionBank) {
        self.current_index = next_index(self.current_index, bank.len());
        self.is_cheater = false;
    }

    /// Move to the previous question, wrapping at the start.
    pub fn retreat(&mut self, bank: &QuestionBank) {
        self.current_index = prev_index(self.current_index, bank.len());
        self.is_cheater = false;
    }

    /// Record `user_value` on the current question and judge it.
    ///
    /// # Errors
    ///
    /// Returns `BankError::OutOfRange` if this state was built for a larger bank.
    pub fn submit_answer(
        &self,
        bank: &mut QuestionBank,
        user_value: bool,
    ) -> Result<AnswerOutcome, BankError> {
        let question = bank.record_answer(self.current_index, user_value)?;
        Ok(AnswerOutcome::evaluate(question, user_value, self.is_cheater))
    }

    /// Flag the current question as revealed without spending a cheat.
    pub fn mark_cheater(&mut self) {
        self.is_cheater = true;
    }

    /// Apply the "was shown" result of a cheat sub-flow.
    ///
    /// Returns `true` when this reveal spent the last cheat.
    pub fn apply_cheat(&mut self, answer_shown: bool) -> bool {
        self.is_cheater = answer_shown;
        if answer_shown {
            self.quota.consume()
        } else {
            false
        }
    }
}
