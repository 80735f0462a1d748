//! Loading a question bank from a JSON file.
//!
//! The file holds an array of `{ "prompt": "...", "answer": true }` records.
//! `prompt` may be a catalog key or literal question text.

use geoquiz_core::model::{BankError, Prompt, QuestionBank};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid bank file: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Bank(#[from] BankError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankEntry {
    pub prompt: String,
    pub answer: bool,
}

/// Parse a bank from JSON text.
///
/// # Errors
///
/// Returns `BankFileError::Json` for malformed input and
/// `BankFileError::Bank` if the array is empty.
pub fn parse_bank(contents: &str) -> Result<QuestionBank, BankFileError> {
    let entries: Vec<BankEntry> = serde_json::from_str(contents)?;
    let bank = QuestionBank::new(
        entries
            .into_iter()
            .map(|entry| (Prompt::new(entry.prompt), entry.answer)),
    )?;
    Ok(bank)
}

/// Read and parse a bank file.
///
/// # Errors
///
/// Returns `BankFileError::Io` if the file cannot be read, otherwise see
/// [`parse_bank`].
pub fn load_bank(path: impl AsRef<Path>) -> Result<QuestionBank, BankFileError> {
    let contents = std::fs::read_to_string(path)?;
    parse_bank(&contents)
}
