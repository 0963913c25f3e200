//! Bigram rarity percentiles (the HLT table)
//!
//! Each dictionary word's mean log-rarity over its four adjacent letter pairs
//! is converted into a percentile rank across the whole dictionary.

use super::Dictionary;
use crate::core::Word;
use crate::features::NEUTRAL;
use crate::normalize::{percentile_ranks, round3};
use crate::tables::BigramTable;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Mean log-rarity of a word's adjacent pairs, 0.5 for unseen pairs
#[must_use]
pub fn raw_bigram_rarity(word: &Word, bigrams: &BigramTable) -> f64 {
    let (sum, count) = word.bigrams().fold((0.0, 0usize), |(sum, count), pair| {
        (sum + bigrams.rarity(pair).unwrap_or(NEUTRAL), count + 1)
    });
    sum / count as f64
}

/// Percentile rank of each dictionary word's raw bigram rarity
#[derive(Debug, Clone)]
pub struct HltTable {
    ranks: FxHashMap<Word, f64>,
}

impl HltTable {
    /// Rank every dictionary word
    #[must_use]
    pub fn build(dictionary: &Dictionary, bigrams: &BigramTable) -> Self {
        let raw: Vec<f64> = dictionary
            .words()
            .par_iter()
            .map(|word| raw_bigram_rarity(word, bigrams))
            .collect();

        let ranks = dictionary
            .iter()
            .copied()
            .zip(percentile_ranks(&raw).into_iter().map(round3))
            .collect();

        Self { ranks }
    }

    /// Percentile of a dictionary word, `None` for words outside it
    #[must_use]
    pub fn get(&self, word: &Word) -> Option<f64> {
        self.ranks.get(word).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}
