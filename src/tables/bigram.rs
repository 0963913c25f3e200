//! Bigram log-rarity table
//!
//! CSV columns: `bigram,log_rarity_score`. Higher scores are rarer pairs.

use super::{csv_reader, open_table};
use crate::error::Result;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct BigramRow {
    bigram: String,
    log_rarity_score: Option<f64>,
}

/// Letter pair → log-rarity score
#[derive(Debug, Clone, Default)]
pub struct BigramTable {
    scores: FxHashMap<[u8; 2], f64>,
}

/// Upper-case a two-letter key, rejecting anything else
fn bigram_key(text: &str) -> Option<[u8; 2]> {
    let bytes: [u8; 2] = text.as_bytes().try_into().ok()?;
    bytes
        .iter()
        .all(u8::is_ascii_alphabetic)
        .then(|| bytes.map(|b| b.to_ascii_uppercase()))
}

impl BigramTable {
    /// An empty table; every pair falls back to the neutral default
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
        let mut scores = FxHashMap::default();
        let mut skipped = 0usize;

        for row in rdr.deserialize::<BigramRow>() {
            let row = row?;
            match (bigram_key(&row.bigram), row.log_rarity_score) {
                (Some(key), Some(score)) if score.is_finite() => {
                    scores.insert(key, score);
                }
                _ => skipped += 1,
            }
        }

        debug!(loaded = scores.len(), skipped, "parsed bigram rarity table");
        Ok(Self { scores })
    }

    /// Load from a CSV file
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or is malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let table = Self::from_reader(open_table(path)?)?;
        info!(path = %path.display(), bigrams = table.len(), "loaded bigram rarity scores");
        Ok(table)
    }

    /// Rarity of an upper-case letter pair, if recorded
    #[must_use]
    pub fn rarity(&self, bigram: [u8; 2]) -> Option<f64> {
        self.scores.get(&bigram).copied()
    }

    /// Record or replace a pair's score; keys are case-normalized
    pub fn insert(&mut self, bigram: &str, score: f64) {
        if let Some(key) = bigram_key(bigram) {
            self.scores.insert(key, score);
        }
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

impl<'a> FromIterator<(&'a str, f64)> for BigramTable {
    fn from_iter<T: IntoIterator<Item = (&'a str, f64)>>(iter: T) -> Self {
        let mut table = Self::default();
        for (bigram, score) in iter {
            table.insert(bigram, score);
        }
        table
    }
}
