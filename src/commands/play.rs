//! Casual Wordle game
//!
//! A random dictionary word, optionally from one difficulty band, is the
//! hidden target. Its difficulty breakdown is revealed when the game ends.

use super::prompt::{get_user_input, is_quit};
use crate::core::{FeedbackPattern, Word, feedback};
use crate::corpus::Dictionary;
use crate::error::Result;
use crate::features::WsaEstimator;
use crate::output::display::print_difficulty_breakdown;
use crate::scoring::{DifficultyBand, DifficultyResult, Scorer};
use colored::Colorize;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::io::{self, BufRead};
use thiserror::Error;

/// Guesses allowed per game
pub const MAX_GUESSES: usize = 6;

/// Why a guess was not accepted
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuessRejected {
    #[error("the game is already over")]
    GameOver,
    #[error("{0} is not in the dictionary")]
    NotInDictionary(Word),
}

/// State of one game
pub struct WordleGame {
    target: Word,
    history: Vec<(Word, FeedbackPattern)>,
}

impl WordleGame {
    #[must_use]
    pub const fn new(target: Word) -> Self {
        Self {
            target,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, FeedbackPattern)] {
        &self.history
    }

    /// Play a guess, which must be a dictionary word
    ///
    /// # Errors
    ///
    /// Returns `GameOver` after a win or the last guess, and
    /// `NotInDictionary` for unknown words.
    pub fn submit(
        &mut self,
        guess: Word,
        dictionary: &Dictionary,
    ) -> Result<FeedbackPattern, GuessRejected> {
        if self.is_over() {
            return Err(GuessRejected::GameOver);
        }
        if !dictionary.contains(&guess) {
            return Err(GuessRejected::NotInDictionary(guess));
        }

        let pattern = feedback(&self.target, &guess);
        self.history.push((guess, pattern));
        Ok(pattern)
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.history
            .last()
            .is_some_and(|(_, pattern)| pattern.is_all_correct())
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_won() || self.history.len() >= MAX_GUESSES
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.history.len())
    }
}

/// Random result within `band`, or from all results if no band is given
pub fn pick_target<R: Rng + ?Sized>(
    results: &[DifficultyResult],
    band: Option<DifficultyBand>,
    rng: &mut R,
) -> Option<DifficultyResult> {
    let pool: Vec<&DifficultyResult> = results
        .iter()
        .filter(|r| band.is_none_or(|b| b.contains(r.ods)))
        .collect();
    pool.choose(rng).map(|r| **r)
}

/// Run the interactive game loop on stdin
///
/// Returns the number of finished games.
///
/// # Errors
///
/// Returns an error if reading from or writing to the terminal fails.
pub fn run_play<E: WsaEstimator>(
    scorer: &Scorer<E>,
    dictionary: &Dictionary,
    band: Option<DifficultyBand>,
) -> Result<usize> {
    let results = scorer.score_all(dictionary);

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Wordle - Difficulty Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    if let Some(band) = band {
        println!("Targets are drawn from {} words.", band.to_string().bright_yellow());
    }
    println!("You have {MAX_GUESSES} guesses. Type 'quit' to exit.\n");

    play_games(
        &results,
        dictionary,
        band,
        &mut io::stdin().lock(),
        &mut rand::rng(),
    )
}

/// Play games until the player quits or the input runs out
///
/// Returns the number of games that reached a win or the last guess.
///
/// # Errors
///
/// Returns an error if reading input or writing to the terminal fails.
pub fn play_games<R: BufRead, G: Rng + ?Sized>(
    results: &[DifficultyResult],
    dictionary: &Dictionary,
    band: Option<DifficultyBand>,
    input: &mut R,
    rng: &mut G,
) -> Result<usize> {
    let mut finished = 0;

    loop {
        let Some(target) = pick_target(results, band, rng) else {
            println!("❌ No dictionary words fall in that band.");
            return Ok(finished);
        };

        let mut game = WordleGame::new(target.word);
        while !game.is_over() {
            let turn = MAX_GUESSES - game.remaining_guesses() + 1;
            let line = get_user_input(input, &format!("Guess {turn}/{MAX_GUESSES}"))?;
            let Some(line) = line.map(|l| l.to_lowercase()).filter(|l| !is_quit(l)) else {
                println!("\nThe word was {}.", target.word.text().bright_yellow().bold());
                println!("👋 Thanks for playing!\n");
                return Ok(finished);
            };

            let guess = match Word::new(&line) {
                Ok(word) => word,
                Err(e) => {
                    println!("❌ {e}");
                    continue;
                }
            };

            match game.submit(guess, dictionary) {
                Ok(pattern) => println!("   {} {}", guess.text().bold(), pattern.to_emoji()),
                Err(e) => println!("❌ {e}"),
            }
        }

        finished += 1;
        println!();
        if game.is_won() {
            let guesses = game.history().len();
            println!(
                "{}",
                format!(
                    "✅ Solved in {guesses} {}!",
                    if guesses == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            );
        } else {
            println!(
                "{} The word was {}.",
                "❌ Out of guesses.".red().bold(),
                target.word.text().bright_yellow().bold()
            );
        }
        print_difficulty_breakdown(&target);

        let again = get_user_input(input, "Play again? (yes/no)")?.map(|l| l.to_lowercase());
        match again.as_deref() {
            Some("yes" | "y") => println!("\n🔄 New game started!\n"),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(finished);
            }
        }
    }
}
