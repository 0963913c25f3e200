//! Wordle word representation
//!
//! A Word stores a 5-letter word as upper-case ASCII bytes. Upper case is the
//! canonical form used by every lookup table in the crate.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in a Wordle word
pub const WORD_LEN: usize = 5;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// A 5-letter Wordle word in canonical upper case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    letters: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

/// Index of an upper-case ASCII letter in the alphabet (A = 0)
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'A') as usize
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is upper-cased; surrounding whitespace is not trimmed.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Contains non-ASCII characters
    /// - Length is not exactly 5
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_difficulty::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let bytes = text.as_bytes();
        let Ok(raw) = <[u8; WORD_LEN]>::try_from(bytes) else {
            return Err(WordError::InvalidLength(bytes.len()));
        };

        if !raw.iter().all(u8::is_ascii_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            letters: raw.map(|b| b.to_ascii_uppercase()),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Letters are validated ASCII, so this never falls back
        std::str::from_utf8(&self.letters).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter.to_ascii_uppercase())
    }

    /// Count of each letter, indexed by `letter_index`
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_LEN] {
        let mut counts = [0u8; ALPHABET_LEN];
        for &letter in &self.letters {
            counts[letter_index(letter)] += 1;
        }
        counts
    }

    /// Number of distinct letters in the word
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.letter_counts().iter().filter(|&&c| c > 0).count()
    }

    /// True if any letter occurs more than once
    #[inline]
    #[must_use]
    pub fn has_repeated_letter(&self) -> bool {
        self.distinct_letters() < WORD_LEN
    }

    /// The four adjacent letter pairs, left to right
    pub fn bigrams(&self) -> impl Iterator<Item = [u8; 2]> + '_ {
        self.letters.windows(2).map(|pair| [pair[0], pair[1]])
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
