//! WSA approximation fitting command
//!
//! Fits the linear approximation and reports how far it strays from the
//! simulated values.

use crate::core::Word;
use crate::corpus::{Dictionary, Statistics};
use crate::error::Result;
use crate::features::wsa::INPUT_NAMES;
use crate::features::{ApproximateWsa, FitReport, SimulatedWsa, WsaEstimator};

/// Simulated and approximated WSA of one word
pub struct WsaComparison {
    pub word: Word,
    pub simulated: f64,
    pub approximate: f64,
}

impl WsaComparison {
    #[must_use]
    pub fn error(&self) -> f64 {
        (self.approximate - self.simulated).abs()
    }
}

/// Result of fitting the approximation
pub struct FitSummary {
    pub report: FitReport,
    /// `(input, weight)` on standardized inputs
    pub weights: Vec<(&'static str, f64)>,
    pub intercept: f64,
    /// Words the approximation misses by the most
    pub largest_errors: Vec<WsaComparison>,
}

/// Fit and compare against simulation
///
/// # Errors
///
/// Returns `FitFailed` if the regression cannot be solved.
pub fn fit_wsa(dictionary: &Dictionary, stats: &Statistics, show: usize) -> Result<FitSummary> {
    let (model, report) = ApproximateWsa::fit(dictionary, stats)?;

    let mut comparisons: Vec<WsaComparison> = dictionary
        .iter()
        .map(|word| WsaComparison {
            word: *word,
            simulated: SimulatedWsa.estimate(word, stats),
            approximate: model.estimate(word, stats),
        })
        .collect();
    comparisons.sort_by(|a, b| b.error().total_cmp(&a.error()).then(a.word.cmp(&b.word)));
    comparisons.truncate(show);

    Ok(FitSummary {
        report,
        weights: INPUT_NAMES.into_iter().zip(model.weights().iter().copied()).collect(),
        intercept: model.intercept(),
        largest_errors: comparisons,
    })
}
