//! Export command
//!
//! Scores the whole dictionary in parallel and writes the difficulty CSV.

use crate::corpus::Dictionary;
use crate::error::Result;
use crate::features::WsaEstimator;
use crate::scoring::Scorer;
use crate::tables::{DifficultyRecord, write_records, write_records_to};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

/// Summary of an export run
pub struct ExportSummary {
    pub rows: usize,
    /// `None` when written to stdout
    pub path: Option<PathBuf>,
    pub duration: Duration,
}

/// Score every dictionary word, optionally showing progress on stderr
#[must_use]
pub fn difficulty_records<E: WsaEstimator>(
    scorer: &Scorer<E>,
    dictionary: &Dictionary,
    show_progress: bool,
) -> Vec<DifficultyRecord> {
    let pb = if show_progress {
        let pb = ProgressBar::new(dictionary.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb.set_message("scoring");
        pb
    } else {
        ProgressBar::hidden()
    };

    let records = dictionary
        .words()
        .par_iter()
        .map(|word| {
            let record = DifficultyRecord::from(&scorer.score_word(word));
            pb.inc(1);
            record
        })
        .collect();

    pb.finish_with_message("Complete!");
    records
}

/// Write the difficulty CSV to `output`, or stdout if none is given
///
/// # Errors
///
/// Returns an error if the output cannot be created or written.
pub fn run_export<E: WsaEstimator>(
    scorer: &Scorer<E>,
    dictionary: &Dictionary,
    output: Option<&Path>,
) -> Result<ExportSummary> {
    let start = Instant::now();
    let records = difficulty_records(scorer, dictionary, output.is_some());

    match output {
        Some(path) => write_records_to(path, &records)?,
        None => write_records(io::stdout().lock(), &records)?,
    }

    let duration = start.elapsed();
    info!(rows = records.len(), elapsed = ?duration, "difficulty table exported");

    Ok(ExportSummary {
        rows: records.len(),
        path: output.map(Path::to_path_buf),
        duration,
    })
}
