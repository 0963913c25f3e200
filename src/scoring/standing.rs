//! A word's difficulty relative to a reference set of scored words
//!
//! Used by the `score` and `lookup` reports: how many reference words the
//! word is harder than, and which reference words score closest to it.

use crate::core::Word;

/// Words listed as having similar difficulty
pub const SIMILAR_WORDS: usize = 5;

/// Percentile of `score` within `scores`, in [0, 100]
///
/// Rank-based: values below `score` count fully, values equal to it count as
/// the mean of the ranks they would take. `None` for an empty reference set.
///
/// # Examples
/// ```
/// use wordle_difficulty::scoring::percentile_of_score;
///
/// assert_eq!(percentile_of_score(&[1.0, 2.0, 3.0, 4.0], 3.0), Some(75.0));
/// assert_eq!(percentile_of_score(&[1.0, 2.0, 3.0, 3.0, 4.0], 3.0), Some(70.0));
/// ```
#[must_use]
pub fn percentile_of_score(scores: &[f64], score: f64) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }

    let below = scores.iter().filter(|&&s| s < score).count();
    let at_or_below = scores.iter().filter(|&&s| s <= score).count();
    let tied = usize::from(below < at_or_below);

    Some((below + at_or_below + tied) as f64 * 50.0 / scores.len() as f64)
}

/// Up to `count` words from `pool` with the ODS closest to `ods`
///
/// `word` itself is skipped. Equal distances keep pool order.
#[must_use]
pub fn similar_words(pool: &[(Word, f64)], word: &Word, ods: f64, count: usize) -> Vec<(Word, f64)> {
    let mut candidates: Vec<(Word, f64)> = pool
        .iter()
        .filter(|(candidate, _)| candidate != word)
        .copied()
        .collect();
    candidates.sort_by(|a, b| (a.1 - ods).abs().total_cmp(&(b.1 - ods).abs()));
    candidates.truncate(count);
    candidates
}

/// Where one word sits among the reference words
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    /// Percentile of the word's ODS among the reference words
    pub harder_than: f64,
    /// Closest reference words by ODS, nearest first
    pub similar: Vec<(Word, f64)>,
}

impl Standing {
    /// `None` if `pool` is empty
    #[must_use]
    pub fn among(pool: &[(Word, f64)], word: &Word, ods: f64) -> Option<Self> {
        let scores: Vec<f64> = pool.iter().map(|(_, s)| *s).collect();
        Some(Self {
            harder_than: percentile_of_score(&scores, ods)?,
            similar: similar_words(pool, word, ods, SIMILAR_WORDS),
        })
    }
}
