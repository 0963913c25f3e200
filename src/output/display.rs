//! Display functions for command results

use super::formatters::{band_label, colored_score_bar, score_bar};
use crate::commands::{ExportSummary, FeedbackReport, FitSummary, LookupReport, ScoreReport};
use crate::features::Feature;
use crate::scoring::{DifficultyResult, RankOrder, Standing};
use colored::Colorize;

/// Print the six features, ODS and expected guesses of one word
pub fn print_difficulty_breakdown(result: &DifficultyResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}  {}",
        "DIFFICULTY:".bright_cyan().bold(),
        result.word.text().bright_yellow().bold(),
        band_label(result.band())
    );
    println!("{}", "═".repeat(60).cyan());

    println!();
    for (feature, value) in result.features.iter() {
        println!(
            "   {:<5} [{}] {:.3}  {}",
            feature.name(),
            colored_score_bar(value, 20),
            value,
            feature.description().bright_black()
        );
    }

    println!(
        "\n   ODS:              {}",
        format!("{:.3}", result.ods).bright_yellow().bold()
    );
    println!("   Expected guesses: {:.3}", result.expected_guesses);
}

/// Print the result of the score command
pub fn print_score_report(report: &ScoreReport) {
    print_difficulty_breakdown(&report.result);

    if !report.in_dictionary {
        println!(
            "\n   {}",
            "Not in the dictionary: WSA is simulated and HLT is neutral".bright_black()
        );
    }

    if let Some(standing) = &report.standing {
        print_standing(standing, "dictionary words");
    }

    let shape = &report.shape;
    println!("\n📊 {}", "Opener response:".bright_cyan().bold());
    println!("   Match reduction:  {:.3}x", shape.match_reduction);
    println!("   Avg elimination:  {:.3} words", shape.avg_elimination);
    println!(
        "   Marks:            {} green  {} yellow  {} gray",
        format!("{:.0}%", shape.feedback_green * 100.0).green(),
        format!("{:.0}%", shape.feedback_yellow * 100.0).yellow(),
        format!("{:.0}%", shape.feedback_gray * 100.0).bright_black()
    );
}

/// Print the result of the feedback command
pub fn print_feedback_report(report: &FeedbackReport) {
    println!(
        "\n{} → {}   {}  {}",
        report.guess.text().bright_white().bold(),
        report.target.text().bright_yellow().bold(),
        report.pattern.to_emoji(),
        report.pattern.to_letters()
    );
    println!(
        "   Candidates: {} → {}",
        report.dictionary_size,
        report.consistent.len()
    );

    if report.consistent.len() <= 10 {
        for word in &report.consistent {
            println!("  • {}", word.text());
        }
    }
}

/// Print a ranking table
pub fn print_ranking(results: &[DifficultyResult], order: RankOrder) {
    let title = match order {
        RankOrder::Hardest => "HARDEST WORDS",
        RankOrder::Easiest => "EASIEST WORDS",
    };
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for (i, result) in results.iter().enumerate() {
        println!(
            "  {:>3}. {}  [{}] {:.3}  {:.2} guesses  {}",
            (i + 1).to_string().bright_black(),
            result.word.text().bright_white().bold(),
            colored_score_bar(result.ods, 20),
            result.ods,
            result.expected_guesses,
            band_label(result.band())
        );
    }
}

/// Print a record read back from a difficulty table
pub fn print_lookup(word: &str, report: Option<&LookupReport>) {
    let Some(LookupReport { record, standing }) = report else {
        println!(
            "{}",
            format!("❌ {} not found in the difficulty table", word.to_uppercase()).red()
        );
        return;
    };

    println!("\n{}", record.word.bright_yellow().bold());
    for (feature, value) in [
        (Feature::Lfs, record.lfs),
        (Feature::Plfs, record.plfs),
        (Feature::Rlp, record.rlp),
        (Feature::Hlt, record.hlt),
        (Feature::Wsa, record.wsa),
        (Feature::Os, record.os),
    ] {
        println!("   {:<5} [{}] {value:.3}", feature.name(), score_bar(value, 20));
    }
    println!("   ODS:              {:.3}", record.ods);
    println!("   Expected guesses: {:.3}", record.expected_guesses);

    if let Some(standing) = standing {
        print_standing(standing, "words in the table");
    }
}

fn print_standing(standing: &Standing, reference: &str) {
    println!(
        "\n   Harder than {} of {reference}",
        format!("{:.1}%", standing.harder_than).bright_yellow().bold()
    );
    if !standing.similar.is_empty() {
        let similar: Vec<String> = standing
            .similar
            .iter()
            .map(|(word, ods)| format!("{} ({ods:.3})", word.text()))
            .collect();
        println!("   Similar difficulty: {}", similar.join(", "));
    }
}

/// Print the result of an export run
pub fn print_export_summary(summary: &ExportSummary) {
    if let Some(path) = &summary.path {
        println!(
            "✅ Wrote {} rows to {} in {:.2}s",
            summary.rows,
            path.display().to_string().bright_white(),
            summary.duration.as_secs_f64()
        );
    }
}

/// Print the result of fitting the WSA approximation
pub fn print_fit_summary(summary: &FitSummary) {
    let report = &summary.report;
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WSA APPROXIMATION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Samples:       {} train / {} held out",
        report.train_samples, report.held_out_samples
    );
    println!(
        "   Train MSE:     {}",
        format!("{:.5}", report.train_mse).bright_yellow()
    );
    match report.held_out_mse {
        Some(mse) => println!("   Held-out MSE:  {}", format!("{mse:.5}").bright_yellow()),
        None => println!("   Held-out MSE:  n/a"),
    }

    println!("\n📈 {}", "Weights (standardized inputs):".bright_cyan().bold());
    println!("   {:<16} {:+.4}", "intercept", summary.intercept);
    for (name, weight) in &summary.weights {
        println!("   {name:<16} {weight:+.4}");
    }

    if !summary.largest_errors.is_empty() {
        println!("\n🔍 {}", "Largest misses:".bright_cyan().bold());
        for cmp in &summary.largest_errors {
            println!(
                "   {}  simulated {:.3}  approx {:.3}  (Δ {:.3})",
                cmp.word.text().bright_white(),
                cmp.simulated,
                cmp.approximate,
                cmp.error()
            );
        }
    }
}
