//! Immutable corpus statistics snapshot
//!
//! Everything the feature functions read is built here in one pass and never
//! mutated afterwards. Rebuilding for a changed dictionary means building a
//! new `Statistics`.

use super::bigram::HltTable;
use super::frequency::{LetterFrequency, PositionalFrequency, letter_tables};
use super::openers::{OpenerPanel, OpenerPartitions, WsaCalibration};
use super::Dictionary;
use crate::error::Result;
use crate::tables::BigramTable;
use std::time::Instant;
use tracing::{debug, info};

/// Corpus-derived lookup tables and normalization constants
#[derive(Debug, Clone)]
pub struct Statistics {
    fingerprint: u64,
    dictionary_size: usize,
    letters: LetterFrequency,
    positions: PositionalFrequency,
    hlt: HltTable,
    partitions: OpenerPartitions,
    wsa: WsaCalibration,
}

impl Statistics {
    /// Build every table for a dictionary
    ///
    /// The WSA bounds are only computed after the raw pass over the whole
    /// dictionary has finished.
    ///
    /// # Errors
    /// Returns `DegenerateCorpus` if the frequency tables have no maximum.
    pub fn build(
        dictionary: &Dictionary,
        bigrams: &BigramTable,
        panel: &OpenerPanel,
    ) -> Result<Self> {
        let start = Instant::now();

        let (letters, positions) = letter_tables(dictionary.words())?;
        debug!(max_letter = letters.max(), "letter frequency tables built");

        let hlt = HltTable::build(dictionary, bigrams);
        debug!(words = hlt.len(), "bigram percentiles ranked");

        let partitions = OpenerPartitions::build(dictionary, panel);
        let wsa = WsaCalibration::build(dictionary, &partitions)?;
        debug!(
            openers = panel.len(),
            min = wsa.bounds().min,
            max = wsa.bounds().max,
            "WSA calibrated"
        );

        let fingerprint = dictionary.fingerprint();
        info!(
            words = dictionary.len(),
            fingerprint = %format!("{fingerprint:016x}"),
            elapsed = ?start.elapsed(),
            "corpus statistics built"
        );

        Ok(Self {
            fingerprint,
            dictionary_size: dictionary.len(),
            letters,
            positions,
            hlt,
            partitions,
            wsa,
        })
    }

    /// Fingerprint of the dictionary snapshot these tables belong to
    #[must_use]
    pub const fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    #[must_use]
    pub const fn dictionary_size(&self) -> usize {
        self.dictionary_size
    }

    #[must_use]
    pub const fn letters(&self) -> &LetterFrequency {
        &self.letters
    }

    #[must_use]
    pub const fn positions(&self) -> &PositionalFrequency {
        &self.positions
    }

    #[must_use]
    pub const fn hlt(&self) -> &HltTable {
        &self.hlt
    }

    #[must_use]
    pub const fn partitions(&self) -> &OpenerPartitions {
        &self.partitions
    }

    #[must_use]
    pub const fn wsa(&self) -> &WsaCalibration {
        &self.wsa
    }
}

/// Build statistics with the standard opener panel
///
/// # Errors
/// See [`Statistics::build`].
pub fn build_statistics(dictionary: &Dictionary, bigrams: &BigramTable) -> Result<Statistics> {
    Statistics::build(dictionary, bigrams, &OpenerPanel::standard())
}
