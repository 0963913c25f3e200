//! Letter-level features: LFS, PLFS and RLP

use super::NEUTRAL;
use crate::core::{WORD_LEN, Word};
use crate::corpus::Statistics;
use crate::normalize::{clamp_unit, piecewise_rescale, round3};

/// Raw LFS at which the rescale switches slope
///
/// Empirical calibration against the reference dictionary; not derived from
/// the data at query time.
pub const LFS_BREAKPOINT: f64 = 0.4;

/// Mean global letter rarity before rescaling
#[must_use]
pub fn raw_letter_frequency(word: &Word, stats: &Statistics) -> f64 {
    let sum: f64 = word
        .letters()
        .iter()
        .map(|&letter| stats.letters().weight(letter).unwrap_or(NEUTRAL))
        .sum();
    sum / WORD_LEN as f64
}

/// Letter Frequency Score
///
/// Mean of `1 - count / max` over the word's letters, then stretched so raw
/// values up to [`LFS_BREAKPOINT`] fill the lower half of the range.
#[must_use]
pub fn letter_frequency_score(word: &Word, stats: &Statistics) -> f64 {
    let raw = raw_letter_frequency(word, stats);
    round3(clamp_unit(piecewise_rescale(raw, LFS_BREAKPOINT)))
}

/// Positional Letter Frequency Score
///
/// Mean over positions of `1 - count_at_position / max_at_position`.
#[must_use]
pub fn positional_letter_frequency_score(word: &Word, stats: &Statistics) -> f64 {
    let sum: f64 = word
        .letters()
        .iter()
        .enumerate()
        .map(|(position, &letter)| {
            stats
                .positions()
                .weight(position, letter)
                .unwrap_or(NEUTRAL)
        })
        .sum();
    round3(sum / WORD_LEN as f64)
}

/// Repeated Letter Penalty: 1 if any letter repeats, else 0
#[must_use]
pub fn repeated_letter_penalty(word: &Word) -> f64 {
    if word.has_repeated_letter() { 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Dictionary, build_statistics};
    use crate::tables::BigramTable;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn stats(words: &[&str]) -> Statistics {
        let dict = Dictionary::from_strs(words).unwrap();
        build_statistics(&dict, &BigramTable::empty()).unwrap()
    }

    #[test]
    fn rlp_is_binary() {
        assert!((repeated_letter_penalty(&word("robot")) - 1.0).abs() < f64::EPSILON);
        assert!((repeated_letter_penalty(&word("speed")) - 1.0).abs() < f64::EPSILON);
        assert!(repeated_letter_penalty(&word("crane")).abs() < f64::EPSILON);
        assert!(repeated_letter_penalty(&word("house")).abs() < f64::EPSILON);
    }

    #[test]
    fn lfs_common_letters_score_low() {
        let stats = stats(&["eerie", "eases", "crane"]);
        // E is the most common letter: weight 0
        assert!(letter_frequency_score(&word("eeeee"), &stats).abs() < f64::EPSILON);
    }

    #[test]
    fn lfs_unknown_letters_use_neutral_weight() {
        let stats = stats(&["eerie", "eases", "crane"]);
        // raw 0.5 for all-unseen letters → 0.5 + 0.1 × 1.25
        assert!((letter_frequency_score(&word("zzzzz"), &stats) - 0.625).abs() < 1e-12);
    }

    #[test]
    fn lfs_rescale_lower_segment() {
        // A and B both appear 5 times: weight 0
        let stats = stats(&["aaaaa", "bbbbb"]);
        assert!(letter_frequency_score(&word("abbab"), &stats).abs() < f64::EPSILON);
    }

    #[test]
    fn plfs_position_weights() {
        let stats = stats(&["slate", "shale", "crane"]);
        // S at 0: 1 - 2/2 = 0; C at 0: 1 - 1/2 = 0.5
        let slate = positional_letter_frequency_score(&word("slate"), &stats);
        let crane = positional_letter_frequency_score(&word("crane"), &stats);
        assert!(slate < crane);
        assert!((0.0..=1.0).contains(&slate));
    }

    #[test]
    fn plfs_unknown_pairs_neutral() {
        let stats = stats(&["slate", "shale", "crane"]);
        assert!((positional_letter_frequency_score(&word("zzzzz"), &stats) - 0.5).abs() < 1e-12);
    }
}
