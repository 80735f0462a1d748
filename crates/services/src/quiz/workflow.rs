use std::sync::Arc;

use geoquiz_core::model::{DEFAULT_CHEATS_ALLOWED, PromptCatalog, QuestionBank};
use storage::SavedStateRepository;

use super::service::QuizService;
use crate::error::QuizError;

/// Builds quiz screens and carries saved state across rotations.
///
/// Every screen gets a fresh copy of the bank, so a rotation keeps the
/// position and cheat count but loses the recorded answers.
#[derive(Clone)]
pub struct QuizLoopService {
    bank: QuestionBank,
    catalog: PromptCatalog,
    cheats_allowed: u32,
    start_index: usize,
    saved: Arc<dyn SavedStateRepository>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(bank: QuestionBank, saved: Arc<dyn SavedStateRepository>) -> Self {
        Self {
            bank,
            catalog: PromptCatalog::geography(),
            cheats_allowed: DEFAULT_CHEATS_ALLOWED,
            start_index: 0,
            saved,
        }
    }

    #[must_use]
    pub fn with_cheats_allowed(mut self, cheats_allowed: u32) -> Self {
        self.cheats_allowed = cheats_allowed;
        self
    }

    #[must_use]
    pub fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: PromptCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Open a quiz screen, resuming from saved state when there is any.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Storage` if saved state cannot be read.
    pub fn start(&self) -> Result<QuizService, QuizError> {
        let bank = self.bank.clone();
        let service = match self.saved.load()? {
            Some(saved) => QuizService::restore(bank, self.cheats_allowed, saved),
            None => QuizService::starting_at(bank, self.cheats_allowed, self.start_index),
        };
        Ok(service.with_catalog(self.catalog.clone()))
    }

    /// Tear a screen down and build it again from its saved state.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Storage` if saved state cannot be written or read.
    pub fn rotate(&self, service: QuizService) -> Result<QuizService, QuizError> {
        self.saved.save(&service.saved_state())?;
        drop(service);
        tracing::info!("quiz screen rebuilt from saved state");
        self.start()
    }

    /// Forget saved state so the next `start` begins fresh.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Storage` if the backend is unavailable.
    pub fn finish(&self) -> Result<(), QuizError> {
        self.saved.clear()?;
        Ok(())
    }
}
