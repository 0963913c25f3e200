//! External lookup tables
//!
//! Opaque data supplied alongside the dictionary: corpus word frequencies,
//! bigram log-rarity scores, a precomputed WSA table and previously exported
//! difficulty records. All are plain CSV with a header row.

pub mod bigram;
pub mod difficulty;
pub mod frequency;
pub mod wsa;

pub use bigram::BigramTable;
pub use difficulty::{DifficultyRecord, DifficultyTable, write_records, write_records_to};
pub use frequency::WordFrequencies;
pub use wsa::{WsaEntry, WsaTable, write_entries, write_entries_to};

use crate::error::{DifficultyError, Result};
use std::fs::File;
use std::path::Path;

/// Open a table file for reading, attaching the path to I/O failures
pub(crate) fn open_table(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| DifficultyError::io(path, e))
}

/// Create a table file for writing, attaching the path to I/O failures
pub(crate) fn create_table(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| DifficultyError::io(path, e))
}

/// CSV reader with the settings shared by every table
pub(crate) fn csv_reader<R: std::io::Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader)
}
