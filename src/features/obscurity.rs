//! Obscurity Score (OS)
//!
//! A four-tier remap of a word's raw corpus frequency. The tier thresholds and
//! endpoints are fixed so scores line up with published reference tables.

use crate::core::Word;
use crate::normalize::round3;
use crate::tables::WordFrequencies;

/// Frequency at and above which a word is considered everyday vocabulary
pub const COMMON_THRESHOLD: f64 = 2_000_000.0;
/// Lower bound of the familiar tier
pub const FAMILIAR_THRESHOLD: f64 = 100_000.0;
/// Lower bound of the uncommon tier; anything rarer scores 1.0
pub const UNCOMMON_THRESHOLD: f64 = 50_000.0;

/// Map a raw frequency onto [0, 1], higher meaning more obscure
///
/// | frequency            | score                 |
/// |----------------------|-----------------------|
/// | ≥ 2,000,000          | `(2,000,000 / f) × 0.5` |
/// | 100,000 – 2,000,000  | 0.5 – 0.7 (linear)    |
/// | 50,000 – 100,000     | 0.7 – 0.9 (linear)    |
/// | < 50,000             | 1.0                   |
///
/// # Examples
/// ```
/// use wordle_difficulty::features::remap_frequency;
///
/// assert_eq!(remap_frequency(2_000_000.0), 0.5);
/// assert_eq!(remap_frequency(0.0), 1.0);
/// ```
#[must_use]
pub fn remap_frequency(freq: f64) -> f64 {
    if freq >= COMMON_THRESHOLD {
        round3((COMMON_THRESHOLD / freq) * 0.5)
    } else if freq >= FAMILIAR_THRESHOLD {
        let norm = (COMMON_THRESHOLD - freq) / (COMMON_THRESHOLD - FAMILIAR_THRESHOLD);
        round3(0.5 + norm * 0.2)
    } else if freq >= UNCOMMON_THRESHOLD {
        let norm = (FAMILIAR_THRESHOLD - freq) / (FAMILIAR_THRESHOLD - UNCOMMON_THRESHOLD);
        round3(0.7 + norm * 0.2)
    } else {
        1.0
    }
}

/// Obscurity of a word; unseen words count as frequency 0
#[must_use]
pub fn obscurity_score(word: &Word, frequencies: &WordFrequencies) -> f64 {
    match frequencies.get(word) {
        Some(freq) if freq > 0.0 => remap_frequency(freq),
        _ => 1.0,
    }
}
