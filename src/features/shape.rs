//! Shape features
//!
//! Summary statistics of how a word responds to a panel of openers. They are
//! the inputs of the approximate WSA estimator and are shown in diagnostics.

use crate::core::{Mark, Word};
use crate::corpus::OpenerPartitions;
use crate::normalize::round3;

/// Opener-panel response of one word
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeFeatures {
    /// Mean of `N / max(1, remaining)` over openers
    pub match_reduction: f64,
    /// Mean number of dictionary words eliminated per opener
    pub avg_elimination: f64,
    /// Fraction of Correct marks over all openers
    pub feedback_green: f64,
    /// Fraction of Present marks over all openers
    pub feedback_yellow: f64,
    /// Fraction of Absent marks over all openers
    pub feedback_gray: f64,
}

impl ShapeFeatures {
    /// Compute against a partitioned dictionary
    #[must_use]
    pub fn compute(word: &Word, partitions: &OpenerPartitions) -> Self {
        let total = partitions.dictionary_size() as f64;
        let mut reduction = 0.0;
        let mut elimination = 0.0;
        let (mut greens, mut yellows, mut grays) = (0usize, 0usize, 0usize);

        for outcome in partitions.outcomes(word) {
            let remaining = f64::from(outcome.remaining);
            reduction += total / remaining.max(1.0);
            elimination += total - remaining;

            greens += outcome.pattern.count(Mark::Correct);
            yellows += outcome.pattern.count(Mark::Present);
            grays += outcome.pattern.count(Mark::Absent);
        }

        let n = partitions.openers().len() as f64;
        let marks = 5.0 * n;

        Self {
            match_reduction: round3(reduction / n),
            avg_elimination: round3(elimination / n),
            feedback_green: round3(greens as f64 / marks),
            feedback_yellow: round3(yellows as f64 / marks),
            feedback_gray: round3(grays as f64 / marks),
        }
    }

    /// Values in a fixed order, for regression inputs
    #[must_use]
    pub const fn to_array(&self) -> [f64; 5] {
        [
            self.match_reduction,
            self.avg_elimination,
            self.feedback_green,
            self.feedback_yellow,
            self.feedback_gray,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Dictionary, OpenerPanel};

    #[test]
    fn shape_against_single_opener() {
        let dict = Dictionary::from_strs(&["slate", "plate", "crate", "fuzzy"]).unwrap();
        let panel = OpenerPanel::from_strs(&["crane"]).unwrap();
        let partitions = OpenerPartitions::build(&dict, &panel);

        let shape = ShapeFeatures::compute(&Word::new("slate").unwrap(), &partitions);

        // Two of four words survive: reduction 4/2, elimination 4-2
        assert!((shape.match_reduction - 2.0).abs() < 1e-12);
        assert!((shape.avg_elimination - 2.0).abs() < 1e-12);
        // BBGBG: 2 greens, 3 grays
        assert!((shape.feedback_green - 0.4).abs() < 1e-12);
        assert!(shape.feedback_yellow.abs() < 1e-12);
        assert!((shape.feedback_gray - 0.6).abs() < 1e-12);
    }

    #[test]
    fn mark_fractions_sum_to_one() {
        let dict = Dictionary::from_strs(&["slate", "plate", "crate", "fuzzy", "robot"]).unwrap();
        let partitions = OpenerPartitions::build(&dict, &OpenerPanel::extended());

        for word in &dict {
            let s = ShapeFeatures::compute(word, &partitions);
            let sum = s.feedback_green + s.feedback_yellow + s.feedback_gray;
            assert!((sum - 1.0).abs() < 0.002);
        }
    }

    #[test]
    fn missing_target_never_divides_by_zero() {
        let dict = Dictionary::from_strs(&["slate", "plate"]).unwrap();
        let panel = OpenerPanel::from_strs(&["crane"]).unwrap();
        let partitions = OpenerPartitions::build(&dict, &panel);

        let shape = ShapeFeatures::compute(&Word::new("crane").unwrap(), &partitions);
        assert!((shape.match_reduction - 2.0).abs() < 1e-12);
        assert!(shape.match_reduction.is_finite());
    }
}
