//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback for a guess using base-3 encoding:
//! - 0 = Absent (letter not in word, or all copies already accounted for)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::word::{WORD_LEN, Word, WordError, letter_index};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

impl Mark {
    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Single-letter form used in text output (G/Y/B)
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'B',
        }
    }

    /// Square emoji form
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback pattern for a guess evaluated against a target
///
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern(u8);

impl FeedbackPattern {
    /// Number of distinct patterns
    pub const COUNT: usize = 243;

    /// All Correct (guess equals target)
    pub const ALL_CORRECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// All Absent
    pub const ALL_ABSENT: Self = Self(0);

    /// Create a pattern from its base-3 code
    ///
    /// # Panics
    /// Panics in debug mode if code >= 243
    #[inline]
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        debug_assert!(code < 243, "Pattern code must be < 243");
        Self(code)
    }

    /// Create a pattern from per-position marks
    #[must_use]
    pub fn from_marks(marks: [Mark; WORD_LEN]) -> Self {
        let mut code = 0u8;
        let mut multiplier = 1u8;
        for mark in marks {
            code += mark as u8 * multiplier;
            multiplier *= 3;
        }
        Self(code)
    }

    /// The raw base-3 code (0-242)
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Code as a bucket index
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Per-position marks, left to right
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LEN] {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut val = self.0;
        for mark in &mut marks {
            *mark = Mark::from_digit(val % 3);
            val /= 3;
        }
        marks
    }

    /// True if every position is Correct
    #[inline]
    #[must_use]
    pub const fn is_all_correct(self) -> bool {
        self.0 == Self::ALL_CORRECT.0
    }

    /// Count positions carrying the given mark
    #[must_use]
    pub fn count(self, mark: Mark) -> usize {
        self.marks().iter().filter(|&&m| m == mark).count()
    }

    /// Calculate the feedback when `guess` is played against hidden `target`
    ///
    /// Implements Wordle's exact rules, including repeated letters.
    ///
    /// # Algorithm
    /// 1. Correct pass: mark exact matches and remove them from the target pool
    /// 2. Present pass: left to right, mark letters still available in the pool
    /// 3. Encode as base-3 number
    ///
    /// # Examples
    /// ```
    /// use wordle_difficulty::core::{FeedbackPattern, Word};
    ///
    /// let target = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// let pattern = FeedbackPattern::calculate(&target, &guess);
    ///
    /// // C(absent) R(absent) A(correct) N(absent) E(correct)
    /// assert_eq!(pattern.to_letters(), "BBGBG");
    /// ```
    #[must_use]
    pub fn calculate(target: &Word, guess: &Word) -> Self {
        let mut result = [Mark::Absent; WORD_LEN];
        let mut available = target.letter_counts();
        let guess_letters = guess.letters();
        let target_letters = target.letters();

        for (i, mark) in result.iter_mut().enumerate() {
            if guess_letters[i] == target_letters[i] {
                *mark = Mark::Correct;
                available[letter_index(guess_letters[i])] -= 1;
            }
        }

        for (i, mark) in result.iter_mut().enumerate() {
            if *mark == Mark::Absent {
                let slot = &mut available[letter_index(guess_letters[i])];
                if *slot > 0 {
                    *mark = Mark::Present;
                    *slot -= 1;
                }
            }
        }

        Self::from_marks(result)
    }

    /// Parse a pattern from a string like "GYB-_" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for Correct
    /// - 'Y'/'y'/🟨 for Present
    /// - 'B'/'b'/'-'/'_'/⬜/⬛ for Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_difficulty::core::FeedbackPattern;
    ///
    /// let p1 = FeedbackPattern::parse("GY-GY").unwrap();
    /// let p2 = FeedbackPattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        let chars: [char; WORD_LEN] = chars.try_into().ok()?;

        let mut marks = [Mark::Absent; WORD_LEN];
        for (mark, ch) in marks.iter_mut().zip(chars) {
            *mark = match ch {
                'G' | 'g' | '🟩' => Mark::Correct,
                'Y' | 'y' | '🟨' => Mark::Present,
                'B' | 'b' | '-' | '_' | '⬜' | '⬛' => Mark::Absent,
                _ => return None,
            };
        }

        Some(Self::from_marks(marks))
    }

    /// Render as a G/Y/B string
    #[must_use]
    pub fn to_letters(self) -> String {
        self.marks().iter().map(|m| m.letter()).collect()
    }

    /// Render as emoji squares
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks().iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_letters())
    }
}

impl FromStr for FeedbackPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

/// Feedback for `guess` against hidden `target`
#[inline]
#[must_use]
pub fn feedback(target: &Word, guess: &Word) -> FeedbackPattern {
    FeedbackPattern::calculate(target, guess)
}

/// Feedback for raw strings, validating both words first
///
/// # Errors
/// Returns `WordError` if either string is not a 5-letter alphabetic word.
pub fn feedback_str(target: &str, guess: &str) -> Result<FeedbackPattern, WordError> {
    let target = Word::new(target)?;
    let guess = Word::new(guess)?;
    Ok(feedback(&target, &guess))
}

/// True if `candidate` could be the target given that `guess` produced `pattern`
#[inline]
#[must_use]
pub fn matches(candidate: &Word, guess: &Word, pattern: FeedbackPattern) -> bool {
    feedback(candidate, guess) == pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn pattern_all_correct_constant() {
        assert_eq!(FeedbackPattern::ALL_CORRECT.code(), 242);
        assert!(FeedbackPattern::ALL_CORRECT.is_all_correct());
        assert_eq!(FeedbackPattern::ALL_CORRECT.count(Mark::Correct), 5);
        assert_eq!(FeedbackPattern::ALL_CORRECT.count(Mark::Present), 0);
    }

    #[test]
    fn pattern_all_absent() {
        let pattern = feedback(&word("fghij"), &word("abcde"));
        assert_eq!(pattern, FeedbackPattern::ALL_ABSENT);
        assert_eq!(pattern.count(Mark::Absent), 5);
    }

    #[test]
    fn pattern_self_is_all_correct() {
        for w in ["crane", "slate", "audio", "zzzzz", "aaaaa", "robot"] {
            let w = word(w);
            assert!(feedback(&w, &w).is_all_correct());
        }
    }

    #[test]
    fn pattern_real_wordle_example() {
        // CRANE guessed against SLATE: only A and E land
        let pattern = feedback(&word("slate"), &word("crane"));
        assert_eq!(pattern.to_letters(), "BBGBG");
        assert_eq!(pattern.code(), 180);
    }

    #[test]
    fn pattern_repeated_guess_letters() {
        // SPEED against ERASE: S present, both E present
        let pattern = feedback(&word("erase"), &word("speed"));
        assert_eq!(pattern.to_letters(), "YBYYB");
        assert_eq!(pattern.code(), 37);
    }

    #[test]
    fn pattern_correct_takes_priority() {
        // ROBOT against FLOOR: first O present, second O correct
        let pattern = feedback(&word("floor"), &word("robot"));
        assert_eq!(pattern.to_letters(), "YYBGB");
    }

    #[test]
    fn pattern_single_target_letter_guessed_twice() {
        // PLEAD has one E; only the leftmost E of the guess gets credit
        let pattern = feedback(&word("plead"), &word("eerie"));
        assert_eq!(pattern.to_letters(), "YBBBB");
    }

    #[test]
    fn pattern_correct_consumes_before_present() {
        // The final E is exact, leaving no E to credit the earlier ones
        let pattern = feedback(&word("crane"), &word("eerie"));
        assert_eq!(pattern.to_letters(), "BBYBG");
    }

    #[test]
    fn pattern_letter_count_conservation() {
        let words = ["crane", "eerie", "speed", "robot", "floor", "geese", "abbey", "llama"];
        for target_text in words {
            for guess_text in words {
                let (target, guess) = (word(target_text), word(guess_text));
                let marks = feedback(&target, &guess).marks();
                let target_counts = target.letter_counts();
                let mut credited = [0u8; 26];
                for (i, mark) in marks.iter().enumerate() {
                    if *mark != Mark::Absent {
                        credited[letter_index(guess.letter_at(i))] += 1;
                    }
                }
                for (credit, available) in credited.iter().zip(target_counts.iter()) {
                    assert!(
                        credit <= available,
                        "{guess_text} vs {target_text} over-credits a letter"
                    );
                }
            }
        }
    }

    #[test]
    fn pattern_parse_valid() {
        let p1 = FeedbackPattern::parse("GYG--").unwrap();
        let p2 = FeedbackPattern::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = FeedbackPattern::parse("gygbb").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        // 2 + 1×3 + 2×9 = 23
        assert_eq!(p1.code(), 23);
    }

    #[test]
    fn pattern_parse_invalid() {
        assert!(FeedbackPattern::parse("GYGGYX").is_none());
        assert!(FeedbackPattern::parse("GYG").is_none());
        assert!(FeedbackPattern::parse("GXGGY").is_none());
        assert!(FeedbackPattern::parse("").is_none());
        assert!("GXGGY".parse::<FeedbackPattern>().is_err());
    }

    #[test]
    fn pattern_render() {
        let p = FeedbackPattern::parse("GY-GY").unwrap();
        assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
        assert_eq!(p.to_string(), "GYBGY");
    }

    #[test]
    fn feedback_str_rejects_malformed() {
        assert!(feedback_str("crane", "slate").is_ok());
        assert_eq!(
            feedback_str("cranes", "slate"),
            Err(WordError::InvalidLength(6))
        );
        assert_eq!(
            feedback_str("crane", "sl4te"),
            Err(WordError::InvalidCharacters)
        );
    }

    #[test]
    fn matches_is_consistent_with_feedback() {
        let guess = word("crane");
        let pattern = feedback(&word("slate"), &guess);
        assert!(matches(&word("slate"), &guess, pattern));
        assert!(matches(&word("plate"), &guess, pattern));
        assert!(!matches(&word("crate"), &guess, pattern));
    }
}
