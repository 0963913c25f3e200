//! The scoring dictionary
//!
//! An ordered set of unique words. Statistics are computed over it and WSA
//! narrowing is simulated against it.

use crate::core::Word;
use crate::error::{DifficultyError, Result};
use rustc_hash::{FxHashMap, FxHasher};
use std::hash::{Hash, Hasher};

/// Ordered set of unique words, read-only once built
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashMap<Word, usize>,
}

impl Dictionary {
    /// Build a dictionary, keeping the first occurrence of each word
    ///
    /// # Errors
    /// Returns `CorpusEmpty` if no words are supplied.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self> {
        let mut unique = Vec::new();
        let mut index = FxHashMap::default();

        for word in words {
            if !index.contains_key(&word) {
                index.insert(word, unique.len());
                unique.push(word);
            }
        }

        if unique.is_empty() {
            return Err(DifficultyError::CorpusEmpty);
        }

        Ok(Self {
            words: unique,
            index,
        })
    }

    /// Build from string slices, rejecting any invalid word
    ///
    /// # Errors
    /// Returns `InvalidWord` on the first malformed entry, or `CorpusEmpty`.
    pub fn from_strs(words: &[&str]) -> Result<Self> {
        let parsed = words
            .iter()
            .map(Word::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(parsed)
    }

    /// Words in dictionary order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; construction rejects empty dictionaries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains_key(word)
    }

    /// Position of a word in dictionary order
    #[must_use]
    pub fn position(&self, word: &Word) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Content hash of the ordered word list
    ///
    /// Identifies the snapshot that corpus-derived constants belong to.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.words.len().hash(&mut hasher);
        for word in &self.words {
            word.hash(&mut hasher);
        }
        hasher.finish()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_deduplicates_in_order() {
        let dict = Dictionary::from_strs(&["crane", "slate", "CRANE", "audio"]).unwrap();

        assert_eq!(dict.len(), 3);
        assert_eq!(dict.words()[0].text(), "CRANE");
        assert_eq!(dict.words()[2].text(), "AUDIO");
        assert_eq!(dict.position(&Word::new("audio").unwrap()), Some(2));
    }

    #[test]
    fn dictionary_rejects_empty() {
        assert!(matches!(
            Dictionary::new(Vec::new()),
            Err(DifficultyError::CorpusEmpty)
        ));
    }

    #[test]
    fn dictionary_rejects_invalid_word() {
        assert!(matches!(
            Dictionary::from_strs(&["crane", "toolong"]),
            Err(DifficultyError::InvalidWord(_))
        ));
    }

    #[test]
    fn dictionary_contains() {
        let dict = Dictionary::from_strs(&["crane", "slate"]).unwrap();
        assert!(dict.contains(&Word::new("slate").unwrap()));
        assert!(!dict.contains(&Word::new("fuzzy").unwrap()));
    }

    #[test]
    fn fingerprint_tracks_content_and_order() {
        let a = Dictionary::from_strs(&["crane", "slate"]).unwrap();
        let b = Dictionary::from_strs(&["crane", "slate"]).unwrap();
        let c = Dictionary::from_strs(&["slate", "crane"]).unwrap();

        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
    }
}
