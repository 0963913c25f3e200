//! WSA table export
//!
//! Writes `Word,RawWSA,WSA` for every dictionary word so later runs can use
//! table lookup instead of simulating.

use crate::corpus::{Dictionary, Statistics};
use crate::error::Result;
use crate::tables::{WsaEntry, write_entries, write_entries_to};
use std::io;
use std::path::Path;
use tracing::info;

/// One entry per dictionary word, in dictionary order
#[must_use]
pub fn wsa_entries(dictionary: &Dictionary, stats: &Statistics) -> Vec<WsaEntry> {
    dictionary
        .iter()
        .map(|word| WsaEntry {
            word: word.text().to_string(),
            raw: stats.wsa().raw(word),
            wsa: stats.wsa().normalized(word).unwrap_or_default(),
        })
        .collect()
}

/// Write the WSA table to `output`, or stdout if none is given
///
/// # Errors
///
/// Returns an error if the output cannot be created or written.
pub fn run_export_wsa(
    dictionary: &Dictionary,
    stats: &Statistics,
    output: Option<&Path>,
) -> Result<usize> {
    let entries = wsa_entries(dictionary, stats);
    match output {
        Some(path) => write_entries_to(path, &entries)?,
        None => write_entries(io::stdout().lock(), &entries)?,
    }
    info!(rows = entries.len(), "WSA table exported");
    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::corpus::OpenerPanel;
    use crate::tables::{BigramTable, WsaTable};

    #[test]
    fn exported_table_matches_simulation() {
        let dict = Dictionary::from_strs(&["slate", "plate", "crate", "fuzzy"]).unwrap();
        let panel = OpenerPanel::from_strs(&["crane"]).unwrap();
        let stats = Statistics::build(&dict, &BigramTable::empty(), &panel).unwrap();

        let entries = wsa_entries(&dict, &stats);
        assert_eq!(entries[0].word, "SLATE");
        assert_eq!(entries[0].raw, Some(2.0));
        assert!((entries[0].wsa - 1.0).abs() < f64::EPSILON);

        let mut buf = Vec::new();
        write_entries(&mut buf, &entries).unwrap();
        let table = WsaTable::from_reader(buf.as_slice()).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.get(&Word::new("crate").unwrap()), Some(0.0));
    }
}
