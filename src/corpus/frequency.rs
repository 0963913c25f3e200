//! Letter frequency tables
//!
//! Global and per-position letter counts over the dictionary, reduced in
//! parallel. Weights are `1 - count / max`, so common letters weigh near 0
//! and rare letters near 1.

use crate::core::{ALPHABET_LEN, WORD_LEN, Word, letter_index};
use crate::error::{DifficultyError, Result};
use rayon::prelude::*;

type PositionCounts = [[u32; ALPHABET_LEN]; WORD_LEN];

/// Count of each letter at each position
fn count_positions(words: &[Word]) -> PositionCounts {
    words
        .par_iter()
        .fold(
            || [[0u32; ALPHABET_LEN]; WORD_LEN],
            |mut acc, word| {
                for (position, &letter) in word.letters().iter().enumerate() {
                    acc[position][letter_index(letter)] += 1;
                }
                acc
            },
        )
        .reduce(
            || [[0u32; ALPHABET_LEN]; WORD_LEN],
            |mut a, b| {
                for (row_a, row_b) in a.iter_mut().zip(b.iter()) {
                    for (x, y) in row_a.iter_mut().zip(row_b.iter()) {
                        *x += y;
                    }
                }
                a
            },
        )
}

/// Weight of a count against a maximum; `None` for letters never seen
fn weight(count: u32, max: u32) -> Option<f64> {
    (count > 0).then(|| 1.0 - f64::from(count) / f64::from(max))
}

/// Global letter counts across every position of every word
#[derive(Debug, Clone)]
pub struct LetterFrequency {
    counts: [u32; ALPHABET_LEN],
    max: u32,
}

impl LetterFrequency {
    fn from_positions(positions: &PositionCounts) -> Result<Self> {
        let mut counts = [0u32; ALPHABET_LEN];
        for row in positions {
            for (total, count) in counts.iter_mut().zip(row.iter()) {
                *total += count;
            }
        }

        let max = counts.iter().copied().max().unwrap_or(0);
        if max == 0 {
            return Err(DifficultyError::DegenerateCorpus(
                "no letters in dictionary",
            ));
        }

        Ok(Self { counts, max })
    }

    /// Count letters over a word list
    ///
    /// # Errors
    /// Returns `DegenerateCorpus` if the list has no letters.
    pub fn from_words(words: &[Word]) -> Result<Self> {
        Self::from_positions(&count_positions(words))
    }

    /// Occurrences of an upper-case letter
    #[must_use]
    pub fn count(&self, letter: u8) -> u32 {
        self.counts[letter_index(letter)]
    }

    /// Count of the most common letter
    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// `1 - count / max`, or `None` if the letter never occurs
    #[must_use]
    pub fn weight(&self, letter: u8) -> Option<f64> {
        weight(self.count(letter), self.max)
    }
}

/// Letter counts for each of the five positions
#[derive(Debug, Clone)]
pub struct PositionalFrequency {
    counts: PositionCounts,
    max: [u32; WORD_LEN],
}

impl PositionalFrequency {
    fn from_positions(counts: PositionCounts) -> Result<Self> {
        let mut max = [0u32; WORD_LEN];
        for (slot, row) in max.iter_mut().zip(counts.iter()) {
            *slot = row.iter().copied().max().unwrap_or(0);
            if *slot == 0 {
                return Err(DifficultyError::DegenerateCorpus(
                    "a letter position has no counts",
                ));
            }
        }
        Ok(Self { counts, max })
    }

    /// Count letters by position over a word list
    ///
    /// # Errors
    /// Returns `DegenerateCorpus` if the list is empty.
    pub fn from_words(words: &[Word]) -> Result<Self> {
        Self::from_positions(count_positions(words))
    }

    /// Occurrences of an upper-case letter at a position (0-4)
    #[must_use]
    pub fn count(&self, position: usize, letter: u8) -> u32 {
        self.counts[position][letter_index(letter)]
    }

    /// Count of the most common letter at a position
    #[must_use]
    pub const fn max(&self, position: usize) -> u32 {
        self.max[position]
    }

    /// `1 - count / max` at a position, or `None` if never seen there
    #[must_use]
    pub fn weight(&self, position: usize, letter: u8) -> Option<f64> {
        weight(self.count(position, letter), self.max[position])
    }
}

/// Build both tables from one counting pass
///
/// # Errors
/// Returns `DegenerateCorpus` if the word list is empty.
pub fn letter_tables(words: &[Word]) -> Result<(LetterFrequency, PositionalFrequency)> {
    let positions = count_positions(words);
    let letters = LetterFrequency::from_positions(&positions)?;
    let positional = PositionalFrequency::from_positions(positions)?;
    Ok((letters, positional))
}
