//! WSA from a precomputed table

use super::WsaEstimator;
use crate::core::Word;
use crate::corpus::Statistics;
use crate::features::NEUTRAL;
use crate::tables::WsaTable;

/// Looks up WSA in a table; words missing from it score [`NEUTRAL`]
#[derive(Debug, Clone, Default)]
pub struct TabulatedWsa {
    table: WsaTable,
}

impl TabulatedWsa {
    #[must_use]
    pub const fn new(table: WsaTable) -> Self {
        Self { table }
    }

    #[must_use]
    pub const fn table(&self) -> &WsaTable {
        &self.table
    }
}

impl WsaEstimator for TabulatedWsa {
    fn estimate(&self, word: &Word, _stats: &Statistics) -> f64 {
        self.table.get(word).unwrap_or(NEUTRAL)
    }

    fn name(&self) -> &'static str {
        "table"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Dictionary, build_statistics};
    use crate::tables::BigramTable;

    #[test]
    fn lookup_with_neutral_fallback() {
        let dict = Dictionary::from_strs(&["crane", "fuzzy"]).unwrap();
        let stats = build_statistics(&dict, &BigramTable::empty()).unwrap();

        let crane = Word::new("crane").unwrap();
        let table: WsaTable = [(crane, 0.25)].into_iter().collect();
        let wsa = TabulatedWsa::new(table);

        assert!((wsa.estimate(&crane, &stats) - 0.25).abs() < f64::EPSILON);
        let fuzzy = Word::new("fuzzy").unwrap();
        assert!((wsa.estimate(&fuzzy, &stats) - NEUTRAL).abs() < f64::EPSILON);
    }
}
