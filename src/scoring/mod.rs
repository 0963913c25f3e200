//! Composite scoring: features in, difficulty out

pub mod band;
pub mod composite;
mod engine;
mod scorer;
pub mod standing;

pub use band::{DifficultyBand, difficulty_band};
pub use composite::{WEIGHTS_PER_MILLE, expected_guesses, overall_difficulty, weight};
pub use engine::{Engine, Sources};
pub use scorer::{DifficultyResult, RankOrder, Scorer, rank};
pub use standing::{SIMILAR_WORDS, Standing, percentile_of_score, similar_words};
