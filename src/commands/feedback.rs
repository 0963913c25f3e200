//! Feedback command
//!
//! Shows the pattern a guess produces and how far it narrows the dictionary.

use crate::core::{FeedbackPattern, Word, feedback, matches};
use crate::corpus::Dictionary;
use crate::error::Result;

/// Result of comparing a guess with a target
pub struct FeedbackReport {
    pub target: Word,
    pub guess: Word,
    pub pattern: FeedbackPattern,
    /// Dictionary words that would show the same pattern
    pub consistent: Vec<Word>,
    pub dictionary_size: usize,
}

/// Compute feedback and the dictionary words consistent with it
///
/// # Errors
///
/// Returns `InvalidWord` if either word is not five ASCII letters.
pub fn analyze_feedback(target: &str, guess: &str, dictionary: &Dictionary) -> Result<FeedbackReport> {
    let target = Word::new(target)?;
    let guess = Word::new(guess)?;
    let pattern = feedback(&target, &guess);

    let consistent = dictionary
        .iter()
        .filter(|candidate| matches(candidate, &guess, pattern))
        .copied()
        .collect();

    Ok(FeedbackReport {
        target,
        guess,
        pattern,
        consistent,
        dictionary_size: dictionary.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consistent_words_share_pattern() {
        let dict = Dictionary::from_strs(&["slate", "plate", "crate", "fuzzy"]).unwrap();
        let report = analyze_feedback("slate", "crane", &dict).unwrap();

        assert_eq!(report.pattern.to_letters(), "BBGBG");
        let texts: Vec<&str> = report.consistent.iter().map(Word::text).collect();
        assert_eq!(texts, ["SLATE", "PLATE"]);
        assert_eq!(report.dictionary_size, 4);
    }

    #[test]
    fn solved_guess_leaves_only_target() {
        let dict = Dictionary::from_strs(&["slate", "plate", "crate"]).unwrap();
        let report = analyze_feedback("crate", "crate", &dict).unwrap();
        assert!(report.pattern.is_all_correct());
        assert_eq!(report.consistent.len(), 1);
    }

    #[test]
    fn invalid_guess_rejected() {
        let dict = Dictionary::from_strs(&["slate"]).unwrap();
        assert!(analyze_feedback("slate", "sl", &dict).is_err());
    }
}
