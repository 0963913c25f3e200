//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded
//! dictionary.

use super::DICTIONARY;
use crate::core::Word;
use crate::corpus::Dictionary;
use crate::error::{DifficultyError, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Parse one word per line, skipping blank lines
///
/// Lines that are not five ASCII letters are skipped with a warning.
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!(line = index + 1, text = trimmed, error = %e, "skipping word");
                    None
                }
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_difficulty::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| DifficultyError::io(path, e))?;
    let words = parse_word_list(&content);
    info!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_difficulty::wordlists::loader::words_from_slice;
/// use wordle_difficulty::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// The embedded default dictionary
///
/// # Errors
/// Returns `CorpusEmpty` if the embedded list has no valid words.
pub fn embedded_dictionary() -> Result<Dictionary> {
    Dictionary::new(words_from_slice(DICTIONARY))
}

/// A dictionary from a file, or the embedded one for `"embedded"`
///
/// # Errors
/// Returns an error if the file cannot be read or holds no valid words.
pub fn load_dictionary(source: &str) -> Result<Dictionary> {
    match source {
        "embedded" => embedded_dictionary(),
        path => Dictionary::new(load_from_file(path)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        // Only "crane" and "slate" are valid 5-letter words
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn parse_skips_blank_and_malformed_lines() {
        let words = parse_word_list("crane\n\n  slate  \ncafé!\nab\nFUZZY\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "SLATE", "FUZZY"]);
    }

    #[test]
    fn embedded_dictionary_loads() {
        let dict = embedded_dictionary().unwrap();
        assert_eq!(dict.len(), DICTIONARY.len());
        assert_eq!(load_dictionary("embedded").unwrap().len(), dict.len());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_from_file("no/such/words.txt").unwrap_err();
        assert!(err.to_string().contains("no/such/words.txt"));
    }
}
