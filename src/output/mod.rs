//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_difficulty_breakdown, print_export_summary, print_feedback_report, print_fit_summary,
    print_lookup, print_ranking, print_score_report,
};
