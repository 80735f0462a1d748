use geoquiz_core::model::{
    AnswerOutcome, CheatQuota, CheatRequest, CheatResponse, PromptCatalog, Question,
    QuestionBank, SavedQuizState, Score, SessionState,
};

use super::cheat::CheatOutcome;
use super::view::QuestionView;
use crate::error::QuizError;

//
// ─── ANSWER REPORT ─────────────────────────────────────────────────────────────
//

/// Outcome of an answer together with the score it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerReport {
    pub outcome: AnswerOutcome,
    pub score: Score,
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// One quiz screen: a question bank plus the session state that walks it.
///
/// All operations are synchronous and driven by user input.
#[derive(Debug, Clone)]
pub struct QuizService {
    bank: QuestionBank,
    state: SessionState,
    catalog: PromptCatalog,
}

impl QuizService {
    /// Start at the first question with `cheats_allowed` cheats.
    #[must_use]
    pub fn new(bank: QuestionBank, cheats_allowed: u32) -> Self {
        Self::starting_at(bank, cheats_allowed, 0)
    }

    /// Start at `index`, wrapped into the bank.
    #[must_use]
    pub fn starting_at(bank: QuestionBank, cheats_allowed: u32, index: usize) -> Self {
        let state = SessionState::starting_at(CheatQuota::new(cheats_allowed), index, &bank);
        Self {
            bank,
            state,
            catalog: PromptCatalog::geography(),
        }
    }

    /// Rebuild a screen from saved state.
    ///
    /// `bank` should be freshly built: user answers are not part of the saved
    /// state and do not survive.
    #[must_use]
    pub fn restore(bank: QuestionBank, cheats_allowed: u32, saved: SavedQuizState) -> Self {
        let state = SessionState::from_saved(saved, cheats_allowed, &bank);
        tracing::debug!(
            index = state.current_index(),
            cheats_used = state.quota().used(),
            "restored quiz state"
        );
        Self {
            bank,
            state,
            catalog: PromptCatalog::geography(),
        }
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: PromptCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn catalog(&self) -> &PromptCatalog {
        &self.catalog
    }

    /// # Errors
    ///
    /// Returns `QuizError::Bank` if the state and bank disagree on size.
    pub fn current_question(&self) -> Result<&Question, QuizError> {
        Ok(self.state.current_question(&self.bank)?)
    }

    /// Display text of the current question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Bank` if the state and bank disagree on size.
    pub fn current_text(&self) -> Result<&str, QuizError> {
        let question = self.current_question()?;
        Ok(self.catalog.resolve(question.prompt()))
    }

    pub fn advance(&mut self) {
        self.state.advance(&self.bank);
        tracing::debug!(index = self.state.current_index(), "advanced");
    }

    pub fn retreat(&mut self) {
        self.state.retreat(&self.bank);
        tracing::debug!(index = self.state.current_index(), "retreated");
    }

    /// Record an answer on the current question, judge it, and tally the score.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Bank` if the state and bank disagree on size.
    pub fn submit_answer(&mut self, user_value: bool) -> Result<AnswerReport, QuizError> {
        let outcome = self.state.submit_answer(&mut self.bank, user_value)?;
        let score = self.bank.score();
        tracing::debug!(
            index = self.state.current_index(),
            user_value,
            ?outcome,
            correct = score.correct,
            "answer submitted"
        );
        Ok(AnswerReport { outcome, score })
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.bank.score()
    }

    #[must_use]
    pub fn can_cheat(&self) -> bool {
        self.state.can_cheat()
    }

    /// Open the cheat sub-flow for the current question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::CheatsExhausted` once the quota is spent.
    pub fn begin_cheat(&self) -> Result<CheatRequest, QuizError> {
        if !self.state.can_cheat() {
            return Err(QuizError::CheatsExhausted);
        }
        let question = self.current_question()?;
        Ok(CheatRequest {
            answer_is_true: question.answer(),
        })
    }

    /// Apply the result of a cheat sub-flow. `None` means it was abandoned.
    pub fn finish_cheat(&mut self, response: Option<CheatResponse>) -> CheatOutcome {
        let Some(response) = response else {
            return CheatOutcome::Ignored;
        };

        if !response.answer_shown {
            self.state.apply_cheat(false);
            return CheatOutcome::NotShown;
        }

        // the answer was seen even if the quota closed; nothing left to spend
        if !self.state.can_cheat() {
            self.state.mark_cheater();
            return CheatOutcome::Ignored;
        }

        if self.state.apply_cheat(true) {
            tracing::info!(
                cheats_used = self.state.quota().used(),
                "cheat quota reached; cheating disabled"
            );
            CheatOutcome::QuotaReached
        } else {
            let remaining = self.state.quota().remaining();
            tracing::info!(remaining, "cheat used");
            CheatOutcome::Recorded { remaining }
        }
    }

    #[must_use]
    pub fn saved_state(&self) -> SavedQuizState {
        self.state.saved()
    }

    /// Snapshot of what the screen should show.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Bank` if the state and bank disagree on size.
    pub fn view(&self) -> Result<QuestionView, QuizError> {
        QuestionView::from_service(self)
    }
}
