//! Ranking command

use crate::corpus::Dictionary;
use crate::features::WsaEstimator;
use crate::scoring::{DifficultyResult, RankOrder, Scorer, rank};

/// The `count` hardest or easiest dictionary words
#[must_use]
pub fn rank_dictionary<E: WsaEstimator>(
    scorer: &Scorer<E>,
    dictionary: &Dictionary,
    count: usize,
    order: RankOrder,
) -> Vec<DifficultyResult> {
    rank(&scorer.score_all(dictionary), count, order)
}
