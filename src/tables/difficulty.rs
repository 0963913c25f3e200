//! Exported difficulty records
//!
//! CSV columns: `Word,LFS,PLFS,RLP,HLT,WSA,OS,ODS,ExpectedGuesses`.

use super::{create_table, csv_reader, open_table};
use crate::core::Word;
use crate::error::Result;
use crate::scoring::DifficultyResult;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// One scored word, as written to and read from CSV
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyRecord {
    #[serde(rename = "Word")]
    pub word: String,
    #[serde(rename = "LFS")]
    pub lfs: f64,
    #[serde(rename = "PLFS")]
    pub plfs: f64,
    #[serde(rename = "RLP")]
    pub rlp: f64,
    #[serde(rename = "HLT")]
    pub hlt: f64,
    #[serde(rename = "WSA")]
    pub wsa: f64,
    #[serde(rename = "OS")]
    pub os: f64,
    #[serde(rename = "ODS")]
    pub ods: f64,
    #[serde(rename = "ExpectedGuesses")]
    pub expected_guesses: f64,
}

impl From<&DifficultyResult> for DifficultyRecord {
    fn from(result: &DifficultyResult) -> Self {
        let f = &result.features;
        Self {
            word: result.word.text().to_string(),
            lfs: f.lfs,
            plfs: f.plfs,
            rlp: f.rlp,
            hlt: f.hlt,
            wsa: f.wsa,
            os: f.os,
            ods: result.ods,
            expected_guesses: result.expected_guesses,
        }
    }
}

/// Previously exported records, in file order and keyed by word
#[derive(Debug, Clone, Default)]
pub struct DifficultyTable {
    records: Vec<(Word, DifficultyRecord)>,
    index: FxHashMap<Word, usize>,
}

impl DifficultyTable {
    /// Parse from any CSV reader; rows with invalid words or a non-finite
    /// ODS are skipped, and a repeated word keeps its last row
    ///
    /// # Errors
    /// Returns an error if the CSV is malformed.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv_reader(reader);
        let mut table = Self::default();
        let mut skipped = 0usize;

        for row in rdr.deserialize::<DifficultyRecord>() {
            let row = row?;
            match Word::new(&row.word) {
                Ok(word) if row.ods.is_finite() => table.insert(word, row),
                _ => skipped += 1,
            }
        }

        debug!(loaded = table.len(), skipped, "parsed difficulty table");
        Ok(table)
    }

    fn insert(&mut self, word: Word, record: DifficultyRecord) {
        if let Some(&i) = self.index.get(&word) {
            self.records[i].1 = record;
        } else {
            self.index.insert(word, self.records.len());
            self.records.push((word, record));
        }
    }

    /// Load from a CSV file
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or is malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let table = Self::from_reader(open_table(path)?)?;
        info!(path = %path.display(), words = table.len(), "loaded difficulty table");
        Ok(table)
    }

    /// Record for `word`, in any letter case
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<&DifficultyRecord> {
        let word = Word::new(word).ok()?;
        self.index.get(&word).map(|&i| &self.records[i].1)
    }

    /// Every record, in file order
    pub fn records(&self) -> impl Iterator<Item = &DifficultyRecord> {
        self.records.iter().map(|(_, record)| record)
    }

    /// Word and ODS of every record, in file order
    #[must_use]
    pub fn ods_scores(&self) -> Vec<(Word, f64)> {
        self.records
            .iter()
            .map(|(word, record)| (*word, record.ods))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Write records as CSV
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_records<W: Write>(writer: W, records: &[DifficultyRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write records to a CSV file
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn write_records_to(path: impl AsRef<Path>, records: &[DifficultyRecord]) -> Result<()> {
    write_records(create_table(path.as_ref())?, records)
}
