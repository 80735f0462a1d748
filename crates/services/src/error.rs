//! Shared error types for the services crate.

use thiserror::Error;

use geoquiz_core::model::BankError;
use storage::StorageError;

/// Errors emitted by quiz services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no cheats left")]
    CheatsExhausted,
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
