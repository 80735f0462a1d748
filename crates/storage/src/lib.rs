#![forbid(unsafe_code)]

pub mod bank_file;
pub mod repository;

pub use bank_file::{BankEntry, BankFileError, load_bank, parse_bank};
pub use repository::{InMemoryRepository, SavedStateRecord, SavedStateRepository, StorageError};
