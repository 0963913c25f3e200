//! Overall Difficulty Score

use crate::features::{Feature, FeatureVector};
use crate::normalize::round3;

/// Feature weights in thousandths, in [`Feature::ALL`] order
pub const WEIGHTS_PER_MILLE: [u32; 6] = [250, 150, 150, 150, 150, 150];

const _: () = {
    let mut sum = 0;
    let mut i = 0;
    while i < WEIGHTS_PER_MILLE.len() {
        sum += WEIGHTS_PER_MILLE[i];
        i += 1;
    }
    assert!(sum == 1000, "feature weights must sum to 1");
};

/// Fewest guesses a word is expected to need
pub const BASE_GUESSES: f64 = 2.5;

/// Extra guesses at ODS = 1
pub const GUESS_SPAN: f64 = 3.5;

/// Weight of a feature in the composite
#[must_use]
pub fn weight(feature: Feature) -> f64 {
    let index = Feature::ALL
        .iter()
        .position(|&f| f == feature)
        .unwrap_or_default();
    f64::from(WEIGHTS_PER_MILLE[index]) / 1000.0
}

/// Weighted sum of the six features, rounded to 3 dp
#[must_use]
pub fn overall_difficulty(features: &FeatureVector) -> f64 {
    let ods: f64 = features.iter().map(|(f, v)| weight(f) * v).sum();
    round3(ods)
}

/// `2.5 + ODS × 3.5`, rounded to 3 dp
#[must_use]
pub fn expected_guesses(ods: f64) -> f64 {
    round3(BASE_GUESSES + ods * GUESS_SPAN)
}
