//! Assembles statistics, lookup tables and a WSA estimator

use super::scorer::Scorer;
use crate::config::ScoringConfig;
use crate::corpus::{Dictionary, Statistics};
use crate::error::Result;
use crate::features::wsa::WsaMode;
use crate::features::{ApproximateWsa, FitReport, SimulatedWsa, TabulatedWsa, WsaStrategy};
use crate::tables::{BigramTable, WordFrequencies, WsaTable};
use tracing::{info, warn};

/// External tables feeding the features
#[derive(Debug, Clone, Default)]
pub struct Sources {
    pub frequencies: WordFrequencies,
    pub bigrams: BigramTable,
    pub wsa_table: Option<WsaTable>,
}

/// Everything needed to score words against one dictionary
pub struct Engine {
    dictionary: Dictionary,
    statistics: Statistics,
    frequencies: WordFrequencies,
    wsa: WsaStrategy,
    fit_report: Option<FitReport>,
}

impl Engine {
    /// Build statistics and the configured WSA estimator
    ///
    /// Table mode without a table, or an approximation that fails to fit,
    /// falls back to simulation with a warning.
    ///
    /// # Errors
    /// Returns an error if the statistics cannot be built.
    pub fn build(dictionary: Dictionary, sources: Sources, config: &ScoringConfig) -> Result<Self> {
        let statistics = Statistics::build(&dictionary, &sources.bigrams, &config.openers)?;

        let (wsa, fit_report) = match config.wsa_mode {
            WsaMode::Simulate => (WsaStrategy::Simulated(SimulatedWsa), None),
            WsaMode::Table => match sources.wsa_table {
                Some(table) => (WsaStrategy::Tabulated(TabulatedWsa::new(table)), None),
                None => {
                    warn!("WSA table mode requested without a table; simulating instead");
                    (WsaStrategy::Simulated(SimulatedWsa), None)
                }
            },
            WsaMode::Approximate => match ApproximateWsa::fit(&dictionary, &statistics) {
                Ok((model, report)) => (WsaStrategy::Approximate(model), Some(report)),
                Err(e) => {
                    warn!(error = %e, "WSA approximation unavailable; simulating instead");
                    (WsaStrategy::Simulated(SimulatedWsa), None)
                }
            },
        };
        info!(wsa = wsa.mode().name(), "scoring engine ready");

        Ok(Self {
            dictionary,
            statistics,
            frequencies: sources.frequencies,
            wsa,
            fit_report,
        })
    }

    /// Scorer borrowing this engine's tables
    #[must_use]
    pub fn scorer(&self) -> Scorer<'_, &WsaStrategy> {
        Scorer::new(&self.statistics, &self.frequencies, &self.wsa)
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    #[must_use]
    pub const fn frequencies(&self) -> &WordFrequencies {
        &self.frequencies
    }

    #[must_use]
    pub const fn wsa(&self) -> &WsaStrategy {
        &self.wsa
    }

    /// Fit quality, when the approximate estimator is in use
    #[must_use]
    pub const fn fit_report(&self) -> Option<&FitReport> {
        self.fit_report.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn dictionary() -> Dictionary {
        Dictionary::from_strs(&["crane", "slate", "stare", "jazzy", "fuzzy", "robot"]).unwrap()
    }

    #[test]
    fn table_mode_without_table_simulates() {
        let config = ScoringConfig::default().with_wsa_mode(WsaMode::Table);
        let engine = Engine::build(dictionary(), Sources::default(), &config).unwrap();
        assert_eq!(engine.wsa().mode(), WsaMode::Simulate);
    }

    #[test]
    fn table_mode_reads_table() {
        let crane = Word::new("crane").unwrap();
        let sources = Sources {
            wsa_table: Some([(crane, 0.125)].into_iter().collect()),
            ..Sources::default()
        };
        let config = ScoringConfig::default().with_wsa_mode(WsaMode::Table);
        let engine = Engine::build(dictionary(), sources, &config).unwrap();

        let result = engine.scorer().score_word(&crane);
        assert!((result.features.wsa - 0.125).abs() < f64::EPSILON);
    }

    #[test]
    fn approximate_mode_reports_fit() {
        let config = ScoringConfig::default().with_wsa_mode(WsaMode::Approximate);
        let engine = Engine::build(dictionary(), Sources::default(), &config).unwrap();
        assert_eq!(engine.wsa().mode(), WsaMode::Approximate);
        assert!(engine.fit_report().is_some());
    }

    #[test]
    fn missing_frequency_is_maximally_obscure() {
        let engine =
            Engine::build(dictionary(), Sources::default(), &ScoringConfig::default()).unwrap();
        let result = engine.scorer().score("crane").unwrap();
        assert!((result.features.os - 1.0).abs() < f64::EPSILON);
    }
}
