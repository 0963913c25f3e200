//! WSA by direct simulation against the dictionary

use super::WsaEstimator;
use crate::core::Word;
use crate::corpus::Statistics;

/// Average survivors over the opener panel, min-max normalized
///
/// Dictionary words use the value computed while building statistics. Other
/// words are simulated on demand and clamped into the dictionary's bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedWsa;

impl WsaEstimator for SimulatedWsa {
    fn estimate(&self, word: &Word, stats: &Statistics) -> f64 {
        stats.wsa().normalized(word).unwrap_or_else(|| {
            let raw = stats.partitions().average_remaining(word);
            stats.wsa().normalize(raw)
        })
    }

    fn name(&self) -> &'static str {
        "simulate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Dictionary, OpenerPanel};
    use crate::tables::BigramTable;

    fn stats() -> Statistics {
        let dict = Dictionary::from_strs(&["slate", "plate", "crate", "fuzzy"]).unwrap();
        let panel = OpenerPanel::from_strs(&["crane"]).unwrap();
        Statistics::build(&dict, &BigramTable::empty(), &panel).unwrap()
    }

    #[test]
    fn dictionary_words_use_calibration() {
        let stats = stats();
        let slate = Word::new("slate").unwrap();
        assert!((SimulatedWsa.estimate(&slate, &stats) - 1.0).abs() < 1e-12);
        let fuzzy = Word::new("fuzzy").unwrap();
        assert!(SimulatedWsa.estimate(&fuzzy, &stats).abs() < 1e-12);
    }

    #[test]
    fn unseen_words_clamp_into_range() {
        let stats = stats();
        // CRANE is not in the dictionary, so nothing survives its all-green feedback
        let crane = Word::new("crane").unwrap();
        let wsa = SimulatedWsa.estimate(&crane, &stats);
        assert!(wsa.abs() < 1e-12);
    }
}
