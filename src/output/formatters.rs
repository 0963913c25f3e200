//! Formatting utilities for terminal output

use crate::scoring::DifficultyBand;
use colored::{ColoredString, Colorize};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a score in [0, 1]
#[must_use]
pub fn score_bar(score: f64, width: usize) -> String {
    create_progress_bar(score, 1.0, width)
}

/// Score bar colored by how hard the score is
#[must_use]
pub fn colored_score_bar(score: f64, width: usize) -> ColoredString {
    let bar = score_bar(score, width);
    if score < 0.35 {
        bar.green()
    } else if score < 0.65 {
        bar.yellow()
    } else {
        bar.red()
    }
}

/// Band name colored by severity
#[must_use]
pub fn band_label(band: DifficultyBand) -> ColoredString {
    let label = band.name().to_uppercase();
    match band {
        DifficultyBand::Easy => label.green().bold(),
        DifficultyBand::Moderate => label.yellow().bold(),
        DifficultyBand::Hard => label.bright_red().bold(),
        DifficultyBand::Brutal => label.red().bold(),
    }
}
