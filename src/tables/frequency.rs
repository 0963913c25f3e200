//! Corpus word-frequency table
//!
//! CSV columns: `word,frequency`. Rows whose word is not a valid 5-letter
//! word are ignored.

use super::{csv_reader, open_table};
use crate::core::Word;
use crate::error::Result;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct FrequencyRow {
    word: String,
    frequency: Option<f64>,
}

/// Word → raw corpus frequency
#[derive(Debug, Clone, Default)]
pub struct WordFrequencies {
    frequencies: FxHashMap<Word, f64>,
}

impl WordFrequencies {
    /// An empty table; every word is treated as unseen
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse from any CSV reader
    ///
    /// # Errors
    /// Returns an error if the CSV is malformed.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv_reader(reader);
        let mut frequencies = FxHashMap::default();
        let mut skipped = 0usize;

        for row in rdr.deserialize::<FrequencyRow>() {
            let row = row?;
            match (Word::new(&row.word), row.frequency) {
                (Ok(word), Some(freq)) if freq.is_finite() => {
                    frequencies.insert(word, freq);
                }
                _ => skipped += 1,
            }
        }

        debug!(
            loaded = frequencies.len(),
            skipped, "parsed word frequency table"
        );
        Ok(Self { frequencies })
    }

    /// Load from a CSV file
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or is malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let table = Self::from_reader(open_table(path)?)?;
        info!(path = %path.display(), words = table.len(), "loaded word frequencies");
        Ok(table)
    }

    /// Raw frequency of a word, if recorded
    #[must_use]
    pub fn get(&self, word: &Word) -> Option<f64> {
        self.frequencies.get(word).copied()
    }

    /// Record or replace a word's frequency
    pub fn insert(&mut self, word: Word, frequency: f64) {
        self.frequencies.insert(word, frequency);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

impl FromIterator<(Word, f64)> for WordFrequencies {
    fn from_iter<T: IntoIterator<Item = (Word, f64)>>(iter: T) -> Self {
        Self {
            frequencies: iter.into_iter().collect(),
        }
    }
}
