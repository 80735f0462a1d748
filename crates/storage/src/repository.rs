use geoquiz_core::model::SavedQuizState;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape of the rotation bundle.
///
/// Field names match the bundle keys (`index`, `cheats_used`) so the domain
/// type does not have to know how it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedStateRecord {
    pub index: u64,
    pub cheats_used: u32,
}

impl SavedStateRecord {
    #[must_use]
    pub fn from_state(state: &SavedQuizState) -> Self {
        Self {
            index: u64::try_from(state.current_index).unwrap_or(u64::MAX),
            cheats_used: state.cheats_used,
        }
    }

    /// Convert the record back into a domain `SavedQuizState`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the index does not fit in `usize`.
    pub fn into_state(self) -> Result<SavedQuizState, StorageError> {
        let current_index = usize::try_from(self.index).map_err(|_| {
            StorageError::Serialization(format!("index {} does not fit in usize", self.index))
        })?;
        Ok(SavedQuizState {
            current_index,
            cheats_used: self.cheats_used,
        })
    }
}

/// Repository contract for the state that survives a rotation.
pub trait SavedStateRepository {
    /// Replace any previously saved state.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the state cannot be stored.
    fn save(&self, state: &SavedQuizState) -> Result<(), StorageError>;

    /// Fetch the saved state, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the stored record cannot be read back.
    fn load(&self) -> Result<Option<SavedQuizState>, StorageError>;

    /// Forget any saved state.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend is unavailable.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Simple in-memory repository; the only backend the quiz needs since saved
/// state lives no longer than the process.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    saved: Arc<Mutex<Option<SavedStateRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            saved: Arc::new(Mutex::new(None)),
        }
    }
}

impl SavedStateRepository for InMemoryRepository {
    fn save(&self, state: &SavedQuizState) -> Result<(), StorageError> {
        let mut guard = self
            .saved
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(SavedStateRecord::from_state(state));
        Ok(())
    }

    fn load(&self) -> Result<Option<SavedQuizState>, StorageError> {
        let guard = self
            .saved
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        (*guard).map(SavedStateRecord::into_state).transpose()
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self
            .saved
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}
