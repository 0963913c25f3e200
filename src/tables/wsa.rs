//! Precomputed WSA table
//!
//! CSV columns: `Word,RawWSA,WSA`. `RawWSA` (average remaining candidates)
//! is optional when reading; `WSA` is the normalized score.

use super::{create_table, csv_reader, open_table};
use crate::core::Word;
use crate::error::Result;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// One row of the WSA table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WsaEntry {
    #[serde(rename = "Word")]
    pub word: String,
    #[serde(rename = "RawWSA", default)]
    pub raw: Option<f64>,
    #[serde(rename = "WSA")]
    pub wsa: f64,
}

/// Word → normalized WSA
#[derive(Debug, Clone, Default)]
pub struct WsaTable {
    scores: FxHashMap<Word, f64>,
}

impl WsaTable {
    /// Parse from any CSV reader, skipping rows with invalid words or
    /// non-finite scores
    ///
    /// # Errors
    /// Returns an error if the CSV is malformed.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv_reader(reader);
        let mut scores = FxHashMap::default();
        let mut skipped = 0usize;

        for row in rdr.deserialize::<WsaEntry>() {
            let row = row?;
            match Word::new(&row.word) {
                Ok(word) if row.wsa.is_finite() => {
                    scores.insert(word, row.wsa);
                }
                _ => skipped += 1,
            }
        }

        debug!(loaded = scores.len(), skipped, "parsed WSA table");
        Ok(Self { scores })
    }

    /// Load from a CSV file
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or is malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let table = Self::from_reader(open_table(path)?)?;
        info!(path = %path.display(), words = table.len(), "loaded precomputed WSA table");
        Ok(table)
    }

    /// Normalized WSA of a word, if recorded
    #[must_use]
    pub fn get(&self, word: &Word) -> Option<f64> {
        self.scores.get(word).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl FromIterator<(Word, f64)> for WsaTable {
    fn from_iter<T: IntoIterator<Item = (Word, f64)>>(iter: T) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

/// Write WSA rows as CSV
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_entries<W: Write>(writer: W, entries: &[WsaEntry]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for entry in entries {
        wtr.serialize(entry)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write WSA rows to a CSV file
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn write_entries_to(path: impl AsRef<Path>, entries: &[WsaEntry]) -> Result<()> {
    write_entries(create_table(path.as_ref())?, entries)
}
