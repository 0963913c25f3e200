//! Lookup command
//!
//! Reads a word's scores from a previously exported difficulty CSV, and
//! places it among every other word in that table.

use crate::core::Word;
use crate::error::Result;
use crate::scoring::Standing;
use crate::tables::{DifficultyRecord, DifficultyTable};
use std::path::Path;

/// A stored record and where it sits in its table
#[derive(Debug, Clone, PartialEq)]
pub struct LookupReport {
    pub record: DifficultyRecord,
    pub standing: Option<Standing>,
}

/// Find `word` in the difficulty table at `path`
///
/// # Errors
///
/// Returns `InvalidWord` for a malformed word, or an error if the table
/// cannot be read.
pub fn lookup_word(word: &str, path: &Path) -> Result<Option<LookupReport>> {
    let word = Word::new(word)?;
    let table = DifficultyTable::from_path(path)?;
    Ok(lookup_in(&table, &word))
}

/// Find `word` in an already loaded table
#[must_use]
pub fn lookup_in(table: &DifficultyTable, word: &Word) -> Option<LookupReport> {
    let record = table.lookup(word.text())?.clone();
    let standing = Standing::among(&table.ods_scores(), word, record.ods);
    Some(LookupReport { record, standing })
}
