//! Hard Letter Transitions (HLT)

use super::NEUTRAL;
use crate::core::Word;
use crate::corpus::Statistics;

/// Percentile of the word's mean bigram rarity within the dictionary
///
/// Words outside the dictionary have no rank and score [`NEUTRAL`].
#[must_use]
pub fn hard_letter_transitions(word: &Word, stats: &Statistics) -> f64 {
    stats.hlt().get(word).unwrap_or(NEUTRAL)
}
