//! Command implementations

pub mod duel;
pub mod export;
pub mod export_wsa;
pub mod feedback;
pub mod fit;
pub mod lookup;
pub mod play;
mod prompt;
pub mod rank;
pub mod score;

pub use duel::{DuelTally, duel_rounds, run_duel};
pub use export::{ExportSummary, difficulty_records, run_export};
pub use export_wsa::{run_export_wsa, wsa_entries};
pub use feedback::{FeedbackReport, analyze_feedback};
pub use fit::{FitSummary, WsaComparison, fit_wsa};
pub use lookup::{LookupReport, lookup_in, lookup_word};
pub use play::{WordleGame, play_games, run_play};
pub use rank::rank_dictionary;
pub use score::{ScoreReport, score_words};
