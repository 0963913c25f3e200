//! Error types for statistics construction and scoring

use crate::core::WordError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the scoring pipeline
///
/// Missing per-word statistics are never errors; they resolve to a neutral
/// default inside the feature functions.
#[derive(Debug, Error)]
pub enum DifficultyError {
    /// Input is not exactly 5 ASCII letters
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    /// Statistics were requested for an empty dictionary
    #[error("dictionary is empty; corpus statistics are undefined")]
    CorpusEmpty,

    /// A frequency table has no usable maximum
    #[error("degenerate corpus: {0}")]
    DegenerateCorpus(&'static str),

    /// The opener panel used for WSA simulation has no words
    #[error("opener panel is empty")]
    EmptyPanel,

    /// The WSA regression system could not be solved
    #[error("WSA approximation fit failed: {0}")]
    FitFailed(String),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV data: {0}")]
    Csv(#[from] csv::Error),

    /// Reading from or writing to the terminal failed
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),
}

impl DifficultyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = DifficultyError> = std::result::Result<T, E>;
