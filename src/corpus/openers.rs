//! Opener panel simulation
//!
//! For every opener in a fixed panel, the dictionary is partitioned by the
//! feedback each word would show if it were the hidden target. The number of
//! words sharing a target's feedback is how many candidates survive that
//! opener. Averaging over the panel gives the raw WSA value.

use super::Dictionary;
use crate::core::{FeedbackPattern, Word, WordError, feedback};
use crate::error::{DifficultyError, Result};
use crate::normalize::{MinMax, round3};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Canonical opening guesses used to measure WSA
pub const DEFAULT_OPENERS: [&str; 10] = [
    "STARE", "CRANE", "SLATE", "AUDIO", "RAISE", "TRACE", "ARISE", "CARTE", "SALET", "REACT",
];

/// Wider panel used for shape features
pub const EXTENDED_OPENERS: [&str; 15] = [
    "STARE", "CRANE", "SLATE", "AUDIO", "RAISE", "TRACE", "ARISE", "CARTE", "SALET", "REACT",
    "POINT", "BLUSH", "NYMPH", "DOING", "FIGHT",
];

/// A fixed, non-empty list of opening guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenerPanel {
    openers: Vec<Word>,
}

impl OpenerPanel {
    /// # Errors
    /// Returns `EmptyPanel` if no openers are given.
    pub fn new(openers: Vec<Word>) -> Result<Self> {
        if openers.is_empty() {
            return Err(DifficultyError::EmptyPanel);
        }
        Ok(Self { openers })
    }

    /// # Errors
    /// Returns `InvalidWord` for a malformed opener, or `EmptyPanel`.
    pub fn from_strs(openers: &[&str]) -> Result<Self> {
        let words = openers
            .iter()
            .map(Word::new)
            .collect::<Result<Vec<_>, WordError>>()?;
        Self::new(words)
    }

    /// The ten canonical openers
    #[must_use]
    pub fn standard() -> Self {
        Self::from_constants(&DEFAULT_OPENERS)
    }

    /// The fifteen-word panel used for shape features
    #[must_use]
    pub fn extended() -> Self {
        Self::from_constants(&EXTENDED_OPENERS)
    }

    fn from_constants(openers: &[&str]) -> Self {
        Self {
            openers: openers.iter().filter_map(|s| Word::new(s).ok()).collect(),
        }
    }

    #[must_use]
    pub fn openers(&self) -> &[Word] {
        &self.openers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.openers.len()
    }

    /// Always false; construction rejects empty panels
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.openers.is_empty()
    }
}

impl Default for OpenerPanel {
    fn default() -> Self {
        Self::standard()
    }
}

/// Survivors of one opener against one target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenerOutcome {
    pub opener: Word,
    pub pattern: FeedbackPattern,
    pub remaining: u32,
}

/// Per-opener histograms of dictionary feedback codes
#[derive(Debug, Clone)]
pub struct OpenerPartitions {
    openers: Vec<Word>,
    buckets: Vec<[u32; FeedbackPattern::COUNT]>,
    dictionary_size: usize,
}

impl OpenerPartitions {
    /// Partition the dictionary under every opener in the panel
    #[must_use]
    pub fn build(dictionary: &Dictionary, panel: &OpenerPanel) -> Self {
        let buckets = panel
            .openers()
            .par_iter()
            .map(|opener| {
                let mut histogram = [0u32; FeedbackPattern::COUNT];
                for target in dictionary {
                    histogram[feedback(target, opener).index()] += 1;
                }
                histogram
            })
            .collect();

        Self {
            openers: panel.openers().to_vec(),
            buckets,
            dictionary_size: dictionary.len(),
        }
    }

    #[must_use]
    pub fn openers(&self) -> &[Word] {
        &self.openers
    }

    #[must_use]
    pub const fn dictionary_size(&self) -> usize {
        self.dictionary_size
    }

    /// Outcome of each opener if `target` were the hidden word
    pub fn outcomes<'a>(&'a self, target: &'a Word) -> impl Iterator<Item = OpenerOutcome> + 'a {
        self.openers
            .iter()
            .zip(&self.buckets)
            .map(move |(opener, histogram)| {
                let pattern = feedback(target, opener);
                OpenerOutcome {
                    opener: *opener,
                    pattern,
                    remaining: histogram[pattern.index()],
                }
            })
    }

    /// Mean number of dictionary words left after each opener (raw WSA)
    #[must_use]
    pub fn average_remaining(&self, target: &Word) -> f64 {
        let total: u64 = self
            .outcomes(target)
            .map(|outcome| u64::from(outcome.remaining))
            .sum();
        total as f64 / self.openers.len() as f64
    }
}

/// Corpus-wide WSA normalization, computed once per dictionary snapshot
#[derive(Debug, Clone)]
pub struct WsaCalibration {
    bounds: MinMax,
    raw: FxHashMap<Word, f64>,
    normalized: FxHashMap<Word, f64>,
}

impl WsaCalibration {
    /// Raw WSA for every dictionary word, then min-max bounds over all of them
    ///
    /// # Errors
    /// Returns `CorpusEmpty` if the dictionary has no words.
    pub fn build(dictionary: &Dictionary, partitions: &OpenerPartitions) -> Result<Self> {
        let raw_values: Vec<f64> = dictionary
            .words()
            .par_iter()
            .map(|word| round3(partitions.average_remaining(word)))
            .collect();

        let bounds =
            MinMax::from_values(raw_values.iter().copied()).ok_or(DifficultyError::CorpusEmpty)?;

        let raw: FxHashMap<Word, f64> = dictionary.iter().copied().zip(raw_values).collect();
        let normalized = raw
            .iter()
            .map(|(word, &value)| (*word, round3(bounds.normalize(value))))
            .collect();

        Ok(Self {
            bounds,
            raw,
            normalized,
        })
    }

    /// Min and max raw WSA across the dictionary
    #[must_use]
    pub const fn bounds(&self) -> MinMax {
        self.bounds
    }

    /// Raw WSA of a dictionary word
    #[must_use]
    pub fn raw(&self, word: &Word) -> Option<f64> {
        self.raw.get(word).copied()
    }

    /// Normalized WSA of a dictionary word
    #[must_use]
    pub fn normalized(&self, word: &Word) -> Option<f64> {
        self.normalized.get(word).copied()
    }

    /// Normalize any raw value against the stored bounds
    #[must_use]
    pub fn normalize(&self, raw: f64) -> f64 {
        round3(self.bounds.normalize(raw))
    }
}
