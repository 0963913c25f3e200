//! Difficulty duel
//!
//! Two random dictionary words are shown; the player picks the one they
//! think is harder.

use super::prompt::{get_user_input, is_quit};
use crate::corpus::Dictionary;
use crate::error::Result;
use crate::features::WsaEstimator;
use crate::output::formatters::score_bar;
use crate::scoring::{DifficultyResult, Scorer};
use colored::Colorize;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::io::{self, BufRead};

/// Draws before giving up on finding two words with different scores
const MAX_DRAWS: usize = 32;

/// Which of the two words the player picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelPick {
    First,
    Second,
}

/// Two words with different ODS
#[derive(Debug, Clone, Copy)]
pub struct DuelRound {
    pub first: DifficultyResult,
    pub second: DifficultyResult,
}

impl DuelRound {
    #[must_use]
    pub fn harder(&self) -> DuelPick {
        if self.first.ods > self.second.ods {
            DuelPick::First
        } else {
            DuelPick::Second
        }
    }

    #[must_use]
    pub fn is_correct(&self, pick: DuelPick) -> bool {
        self.harder() == pick
    }
}

/// Running score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DuelTally {
    pub rounds: usize,
    pub correct: usize,
}

/// Two distinct results whose ODS differ, if the pool has any
pub fn draw_round<R: Rng + ?Sized>(results: &[DifficultyResult], rng: &mut R) -> Option<DuelRound> {
    (0..MAX_DRAWS).find_map(|_| {
        let mut pair = results.choose_multiple(rng, 2);
        let first = *pair.next()?;
        let second = *pair.next()?;
        ((first.ods - second.ods).abs() > f64::EPSILON).then_some(DuelRound { first, second })
    })
}

fn parse_pick(input: &str, round: &DuelRound) -> Option<DuelPick> {
    match input {
        "1" => Some(DuelPick::First),
        "2" => Some(DuelPick::Second),
        _ if input.eq_ignore_ascii_case(round.first.word.text()) => Some(DuelPick::First),
        _ if input.eq_ignore_ascii_case(round.second.word.text()) => Some(DuelPick::Second),
        _ => None,
    }
}

/// Run the interactive duel on stdin for up to `rounds` rounds
///
/// # Errors
///
/// Returns an error if reading from or writing to the terminal fails.
pub fn run_duel<E: WsaEstimator>(
    scorer: &Scorer<E>,
    dictionary: &Dictionary,
    rounds: usize,
) -> Result<DuelTally> {
    let results = scorer.score_all(dictionary);

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Which Word Is Harder?                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Answer 1 or 2 (or type the word). Type 'quit' to stop.\n");

    let tally = duel_rounds(&results, rounds, &mut io::stdin().lock(), &mut rand::rng())?;

    println!(
        "Final score: {}/{}",
        tally.correct.to_string().bright_cyan().bold(),
        tally.rounds
    );
    Ok(tally)
}

/// Play rounds until `rounds` are answered, the player quits or the input
/// runs out
///
/// # Errors
///
/// Returns an error if reading input or writing to the terminal fails.
pub fn duel_rounds<R: BufRead, G: Rng + ?Sized>(
    results: &[DifficultyResult],
    rounds: usize,
    input: &mut R,
    rng: &mut G,
) -> Result<DuelTally> {
    let mut tally = DuelTally::default();

    while tally.rounds < rounds {
        let Some(round) = draw_round(results, rng) else {
            println!("❌ Not enough distinct words to duel.");
            break;
        };

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Round {}:  1) {}   2) {}",
            tally.rounds + 1,
            round.first.word.text().bright_white().bold(),
            round.second.word.text().bright_white().bold()
        );

        let pick = loop {
            let Some(line) = get_user_input(input, "Harder word")?
                .map(|l| l.to_lowercase())
                .filter(|l| !is_quit(l))
            else {
                return Ok(tally);
            };
            if let Some(pick) = parse_pick(&line, &round) {
                break pick;
            }
            println!("❌ Enter 1, 2 or one of the two words\n");
        };

        tally.rounds += 1;
        if round.is_correct(pick) {
            tally.correct += 1;
            println!("{}", "✅ Correct!".green().bold());
        } else {
            println!("{}", "❌ Not quite.".red().bold());
        }
        for result in [round.first, round.second] {
            println!(
                "   {} [{}] ODS {:.3}",
                result.word.text(),
                score_bar(result.ods, 20),
                result.ods
            );
        }
        println!();
    }

    Ok(tally)
}
