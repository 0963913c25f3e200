//! Word Structure Advantage estimators
//!
//! WSA measures how many dictionary words stay consistent with a target
//! after each opener in the panel. Three interchangeable estimators produce
//! it: full simulation against the corpus, a precomputed table lookup, and a
//! fitted linear approximation that needs no lookup for unseen words.

mod approximate;
mod simulated;
mod tabulated;

pub use approximate::{ApproximateWsa, FitReport, INPUT_NAMES};
pub use simulated::SimulatedWsa;
pub use tabulated::TabulatedWsa;

use crate::core::Word;
use crate::corpus::Statistics;
use std::fmt;

/// A source of normalized WSA scores
pub trait WsaEstimator: Send + Sync {
    /// WSA in [0, 1] for `word`; higher means more candidates survive
    fn estimate(&self, word: &Word, stats: &Statistics) -> f64;

    /// Short name for logs and reports
    fn name(&self) -> &'static str;
}

impl<T: WsaEstimator + ?Sized> WsaEstimator for &T {
    fn estimate(&self, word: &Word, stats: &Statistics) -> f64 {
        (**self).estimate(word, stats)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Which estimator to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WsaMode {
    /// Simulate every opener against the dictionary
    #[default]
    Simulate,
    /// Read a precomputed table
    Table,
    /// Fit and apply the linear approximation
    Approximate,
}

impl WsaMode {
    /// Parse a mode name
    ///
    /// Supported names: "simulate" (default), "table", "approximate".
    /// Unrecognized names fall back to simulation.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "table" | "tabulated" | "lookup" => Self::Table,
            "approximate" | "approx" | "fit" => Self::Approximate,
            _ => Self::Simulate,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Simulate => "simulate",
            Self::Table => "table",
            Self::Approximate => "approximate",
        }
    }
}

impl fmt::Display for WsaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Enum wrapper over the estimators
///
/// Allows choosing the estimator at runtime while scoring stays statically
/// dispatched.
#[derive(Debug, Clone)]
pub enum WsaStrategy {
    Simulated(SimulatedWsa),
    Tabulated(TabulatedWsa),
    Approximate(ApproximateWsa),
}

impl WsaStrategy {
    #[must_use]
    pub const fn mode(&self) -> WsaMode {
        match self {
            Self::Simulated(_) => WsaMode::Simulate,
            Self::Tabulated(_) => WsaMode::Table,
            Self::Approximate(_) => WsaMode::Approximate,
        }
    }
}

impl WsaEstimator for WsaStrategy {
    fn estimate(&self, word: &Word, stats: &Statistics) -> f64 {
        match self {
            Self::Simulated(s) => s.estimate(word, stats),
            Self::Tabulated(s) => s.estimate(word, stats),
            Self::Approximate(s) => s.estimate(word, stats),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Simulated(s) => s.name(),
            Self::Tabulated(s) => s.name(),
            Self::Approximate(s) => s.name(),
        }
    }
}

impl Default for WsaStrategy {
    fn default() -> Self {
        Self::Simulated(SimulatedWsa)
    }
}
