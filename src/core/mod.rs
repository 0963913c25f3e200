//! Core domain types for Wordle
//!
//! Words and the feedback simulator. Everything here is pure and has no
//! dependency on corpus statistics.

mod feedback;
mod word;

pub use feedback::{FeedbackPattern, Mark, feedback, feedback_str, matches};
pub use word::{ALPHABET_LEN, WORD_LEN, Word, WordError, letter_index};
