//! Corpus statistics builder
//!
//! One-time passes over the dictionary producing the immutable tables the
//! feature functions read: letter and positional frequencies, bigram rarity
//! percentiles, and the opener partitions with their WSA bounds.

pub mod bigram;
mod dictionary;
pub mod frequency;
pub mod openers;
mod statistics;

pub use bigram::{HltTable, raw_bigram_rarity};
pub use dictionary::Dictionary;
pub use frequency::{LetterFrequency, PositionalFrequency};
pub use openers::{
    DEFAULT_OPENERS, EXTENDED_OPENERS, OpenerOutcome, OpenerPanel, OpenerPartitions,
    WsaCalibration,
};
pub use statistics::{Statistics, build_statistics};
