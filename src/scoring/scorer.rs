//! Per-word difficulty scoring

use super::band::DifficultyBand;
use super::composite::{expected_guesses, overall_difficulty};
use crate::core::Word;
use crate::corpus::{Dictionary, Statistics};
use crate::error::Result;
use crate::features::{
    FeatureVector, WsaEstimator, hard_letter_transitions, letter_frequency_score,
    obscurity_score, positional_letter_frequency_score, repeated_letter_penalty,
};
use crate::normalize::{clamp_unit, round3};
use crate::tables::WordFrequencies;
use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::trace;

/// Full difficulty breakdown of one word
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyResult {
    pub word: Word,
    pub features: FeatureVector,
    /// Overall Difficulty Score in [0, 1]
    pub ods: f64,
    /// Predicted guesses to solve, in [2.5, 6.0]
    pub expected_guesses: f64,
}

impl DifficultyResult {
    #[must_use]
    pub fn band(&self) -> DifficultyBand {
        DifficultyBand::from_ods(self.ods)
    }
}

/// Scores words against one statistics snapshot
///
/// Generic over the WSA estimator so the choice of estimator costs nothing
/// per word.
pub struct Scorer<'a, E: WsaEstimator> {
    stats: &'a Statistics,
    frequencies: &'a WordFrequencies,
    wsa: E,
}

impl<'a, E: WsaEstimator> Scorer<'a, E> {
    /// Create a scorer
    ///
    /// # Parameters
    /// - `stats`: Corpus statistics built from the dictionary
    /// - `frequencies`: Everyday word frequencies for the obscurity score
    /// - `wsa`: Source of WSA values
    pub const fn new(stats: &'a Statistics, frequencies: &'a WordFrequencies, wsa: E) -> Self {
        Self {
            stats,
            frequencies,
            wsa,
        }
    }

    #[must_use]
    pub const fn statistics(&self) -> &'a Statistics {
        self.stats
    }

    #[must_use]
    pub const fn estimator(&self) -> &E {
        &self.wsa
    }

    /// Validate and score a word
    ///
    /// # Errors
    /// Returns `InvalidWord` if `word` is not exactly five ASCII letters.
    pub fn score(&self, word: &str) -> Result<DifficultyResult> {
        let word = Word::new(word)?;
        Ok(self.score_word(&word))
    }

    /// Score an already validated word
    #[must_use]
    pub fn score_word(&self, word: &Word) -> DifficultyResult {
        let features = self.features(word);
        let ods = overall_difficulty(&features);
        trace!(word = %word, ods, "scored");

        DifficultyResult {
            word: *word,
            features,
            ods,
            expected_guesses: expected_guesses(ods),
        }
    }

    /// The six feature scores, each rounded to 3 dp
    #[must_use]
    pub fn features(&self, word: &Word) -> FeatureVector {
        FeatureVector {
            lfs: letter_frequency_score(word, self.stats),
            plfs: positional_letter_frequency_score(word, self.stats),
            rlp: repeated_letter_penalty(word),
            hlt: hard_letter_transitions(word, self.stats),
            wsa: round3(clamp_unit(self.wsa.estimate(word, self.stats))),
            os: obscurity_score(word, self.frequencies),
        }
    }

    /// Score every dictionary word in parallel, in dictionary order
    #[must_use]
    pub fn score_all(&self, dictionary: &Dictionary) -> Vec<DifficultyResult> {
        dictionary
            .words()
            .par_iter()
            .map(|word| self.score_word(word))
            .collect()
    }
}

/// Direction of a ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankOrder {
    #[default]
    Hardest,
    Easiest,
}

/// The `n` hardest or easiest results by ODS, ties broken alphabetically
#[must_use]
pub fn rank(results: &[DifficultyResult], n: usize, order: RankOrder) -> Vec<DifficultyResult> {
    let mut ranked = results.to_vec();
    ranked.sort_by(|a, b| {
        let by_ods = match order {
            RankOrder::Hardest => b.ods.total_cmp(&a.ods),
            RankOrder::Easiest => a.ods.total_cmp(&b.ods),
        };
        match by_ods {
            Ordering::Equal => a.word.cmp(&b.word),
            other => other,
        }
    });
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::build_statistics;
    use crate::features::SimulatedWsa;
    use crate::tables::BigramTable;

    fn corpus() -> (Dictionary, Statistics, WordFrequencies) {
        let dict = Dictionary::from_strs(&[
            "stare", "slate", "crane", "trace", "arise", "raise", "later", "alert", "jazzy",
            "fuzzy",
        ])
        .unwrap();
        let stats = build_statistics(&dict, &BigramTable::empty()).unwrap();
        let freqs: WordFrequencies = [
            (Word::new("stare").unwrap(), 3_000_000.0),
            (Word::new("slate").unwrap(), 2_500_000.0),
        ]
        .into_iter()
        .collect();
        (dict, stats, freqs)
    }

    #[test]
    fn scores_are_bounded() {
        let (dict, stats, freqs) = corpus();
        let scorer = Scorer::new(&stats, &freqs, SimulatedWsa);

        for result in scorer.score_all(&dict) {
            assert!(result.features.is_normalized());
            assert!((0.0..=1.0).contains(&result.ods));
            assert!((2.5..=6.0).contains(&result.expected_guesses));
        }
    }

    #[test]
    fn score_rejects_invalid_input() {
        let (_, stats, freqs) = corpus();
        let scorer = Scorer::new(&stats, &freqs, SimulatedWsa);
        assert!(scorer.score("toolong").is_err());
        assert!(scorer.score("cr4ne").is_err());
    }

    #[test]
    fn score_is_case_insensitive() {
        let (_, stats, freqs) = corpus();
        let scorer = Scorer::new(&stats, &freqs, SimulatedWsa);
        assert_eq!(scorer.score("SLATE").unwrap(), scorer.score("slate").unwrap());
    }

    #[test]
    fn score_all_keeps_dictionary_order() {
        let (dict, stats, freqs) = corpus();
        let scorer = Scorer::new(&stats, &freqs, SimulatedWsa);
        let words: Vec<Word> = scorer.score_all(&dict).iter().map(|r| r.word).collect();
        assert_eq!(words, dict.words());
    }

    #[test]
    fn rare_repeated_word_outscores_common_one() {
        let (_, stats, freqs) = corpus();
        let scorer = Scorer::new(&stats, &freqs, SimulatedWsa);
        let stare = scorer.score("stare").unwrap();
        let jazzy = scorer.score("jazzy").unwrap();
        assert!(jazzy.ods > stare.ods);
        assert!((jazzy.features.rlp - 1.0).abs() < f64::EPSILON);
        assert!((jazzy.features.os - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rank_orders_and_breaks_ties() {
        let (_, stats, freqs) = corpus();
        let scorer = Scorer::new(&stats, &freqs, SimulatedWsa);
        let base = scorer.score("crane").unwrap();
        let make = |text: &str, ods: f64| DifficultyResult {
            word: Word::new(text).unwrap(),
            ods,
            ..base
        };
        let results = [
            make("bbbbb", 0.4),
            make("aaaaa", 0.4),
            make("ccccc", 0.9),
            make("ddddd", 0.1),
        ];

        let hardest = rank(&results, 3, RankOrder::Hardest);
        let texts: Vec<&str> = hardest.iter().map(|r| r.word.text()).collect();
        assert_eq!(texts, ["CCCCC", "AAAAA", "BBBBB"]);

        let easiest = rank(&results, 2, RankOrder::Easiest);
        let texts: Vec<&str> = easiest.iter().map(|r| r.word.text()).collect();
        assert_eq!(texts, ["DDDDD", "AAAAA"]);

        assert_eq!(rank(&results, 10, RankOrder::Hardest).len(), 4);
    }
}
