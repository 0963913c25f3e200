//! Wordle Difficulty
//!
//! Scores how hard a five-letter word is to find in Wordle, from letter
//! statistics, bigram rarity, everyday frequency and simulated opener play.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_difficulty::corpus::build_statistics;
//! use wordle_difficulty::features::SimulatedWsa;
//! use wordle_difficulty::scoring::Scorer;
//! use wordle_difficulty::tables::{BigramTable, WordFrequencies};
//! use wordle_difficulty::wordlists::loader::embedded_dictionary;
//!
//! let dictionary = embedded_dictionary().unwrap();
//! let stats = build_statistics(&dictionary, &BigramTable::empty()).unwrap();
//! let frequencies = WordFrequencies::empty();
//!
//! let scorer = Scorer::new(&stats, &frequencies, SimulatedWsa);
//! let result = scorer.score("slate").unwrap();
//! println!("ODS {:.3}, expected guesses {:.2}", result.ods, result.expected_guesses);
//! ```

// Core domain types
pub mod core;

// Errors and configuration
pub mod config;
pub mod error;

// Shared numeric helpers
pub mod normalize;

// External lookup tables
pub mod tables;

// Corpus statistics, features and scoring
pub mod corpus;
pub mod features;
pub mod scoring;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use config::ScoringConfig;
pub use error::{DifficultyError, Result};
