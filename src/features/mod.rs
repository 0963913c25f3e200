//! Difficulty feature functions
//!
//! Each feature maps a word to a score in [0, 1] using the corpus
//! statistics. Any statistic that is missing for a word resolves to
//! [`NEUTRAL`] instead of failing.

pub mod letter;
pub mod obscurity;
pub mod shape;
pub mod transitions;
pub mod wsa;

pub use letter::{letter_frequency_score, positional_letter_frequency_score, repeated_letter_penalty};
pub use obscurity::{obscurity_score, remap_frequency};
pub use shape::ShapeFeatures;
pub use transitions::hard_letter_transitions;
pub use wsa::{ApproximateWsa, FitReport, SimulatedWsa, TabulatedWsa, WsaEstimator, WsaStrategy};

use std::fmt;

/// Fallback for any statistic with no entry
pub const NEUTRAL: f64 = 0.5;

/// The six scored features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Letter frequency score
    Lfs,
    /// Positional letter frequency score
    Plfs,
    /// Repeated letter penalty
    Rlp,
    /// Hard letter transitions
    Hlt,
    /// Word structure advantage
    Wsa,
    /// Obscurity score
    Os,
}

impl Feature {
    /// All features in output column order
    pub const ALL: [Self; 6] = [
        Self::Lfs,
        Self::Plfs,
        Self::Rlp,
        Self::Hlt,
        Self::Wsa,
        Self::Os,
    ];

    /// Column name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lfs => "LFS",
            Self::Plfs => "PLFS",
            Self::Rlp => "RLP",
            Self::Hlt => "HLT",
            Self::Wsa => "WSA",
            Self::Os => "OS",
        }
    }

    /// One-line description for display
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Lfs => "Rarity of the word's letters overall",
            Self::Plfs => "Rarity of each letter in its position",
            Self::Rlp => "Word repeats a letter",
            Self::Hlt => "Rarity of adjacent letter pairs",
            Self::Wsa => "Candidates surviving common openers",
            Self::Os => "Obscurity in everyday usage",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The six feature scores for one word, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub lfs: f64,
    pub plfs: f64,
    pub rlp: f64,
    pub hlt: f64,
    pub wsa: f64,
    pub os: f64,
}

impl FeatureVector {
    #[must_use]
    pub const fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Lfs => self.lfs,
            Feature::Plfs => self.plfs,
            Feature::Rlp => self.rlp,
            Feature::Hlt => self.hlt,
            Feature::Wsa => self.wsa,
            Feature::Os => self.os,
        }
    }

    /// `(feature, score)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::ALL.into_iter().map(|f| (f, self.get(f)))
    }

    /// True if every score lies in [0, 1]
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.iter().all(|(_, v)| (0.0..=1.0).contains(&v))
    }
}
