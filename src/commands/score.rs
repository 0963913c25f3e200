//! Word scoring command
//!
//! Scores one or more words and collects diagnostics alongside the result,
//! including where each word sits among the dictionary's own scores.

use crate::core::{Word, WordError};
use crate::corpus::Dictionary;
use crate::error::Result;
use crate::features::{ShapeFeatures, WsaEstimator};
use crate::scoring::{DifficultyResult, Scorer, Standing};

/// Result of scoring a word, with diagnostics
pub struct ScoreReport {
    pub result: DifficultyResult,
    pub in_dictionary: bool,
    /// Opener-panel response against the scoring panel
    pub shape: ShapeFeatures,
    /// Percentile and closest words among the scored dictionary
    pub standing: Option<Standing>,
}

/// Score each word in turn
///
/// # Errors
///
/// Returns `InvalidWord` for the first word that is not five ASCII letters.
pub fn score_words<E: WsaEstimator>(
    words: &[String],
    scorer: &Scorer<E>,
    dictionary: &Dictionary,
) -> Result<Vec<ScoreReport>> {
    let words = words
        .iter()
        .map(Word::new)
        .collect::<Result<Vec<_>, WordError>>()?;

    let pool: Vec<(Word, f64)> = scorer
        .score_all(dictionary)
        .into_iter()
        .map(|r| (r.word, r.ods))
        .collect();

    Ok(words
        .into_iter()
        .map(|word| {
            let result = scorer.score_word(&word);
            ScoreReport {
                in_dictionary: dictionary.contains(&word),
                shape: ShapeFeatures::compute(&word, scorer.statistics().partitions()),
                standing: Standing::among(&pool, &word, result.ods),
                result,
            }
        })
        .collect())
}
