//! Wordle Difficulty - CLI
//!
//! Scores Wordle answers by letter rarity, bigram rarity, obscurity and how
//! many candidates survive common openers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wordle_difficulty::{
    ScoringConfig,
    commands::{
        analyze_feedback, fit_wsa, lookup_word, rank_dictionary, run_duel, run_export,
        run_export_wsa, run_play, score_words,
    },
    corpus::{Dictionary, OpenerPanel},
    features::wsa::WsaMode,
    output::{
        print_export_summary, print_feedback_report, print_fit_summary, print_lookup,
        print_ranking, print_score_report,
    },
    scoring::{DifficultyBand, Engine, RankOrder, Sources},
    tables::{BigramTable, WordFrequencies, WsaTable},
    wordlists::loader::load_dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_difficulty",
    about = "Score how hard Wordle answers are to guess",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary: 'embedded' (default) or path to a word list, one word per line
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Word frequency CSV (word,frequency) for the obscurity score
    #[arg(short = 'f', long, global = true)]
    frequencies: Option<PathBuf>,

    /// Bigram rarity CSV (bigram,log_rarity_score) for hard letter transitions
    #[arg(short = 'b', long, global = true)]
    bigrams: Option<PathBuf>,

    /// Precomputed WSA CSV (Word,RawWSA,WSA) for '--wsa table'
    #[arg(long, global = true)]
    wsa_table: Option<PathBuf>,

    /// WSA estimator: simulate (default), table, approximate
    #[arg(long, global = true, default_value = "simulate")]
    wsa: String,

    /// Use the 15-word extended opener panel for WSA
    #[arg(long, global = true)]
    extended_openers: bool,

    /// Log level when RUST_LOG is unset: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one or more words
    Score {
        /// Words to score
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Show the feedback a guess gets and how many words stay consistent
    Feedback {
        /// Hidden target word
        target: String,
        /// Guessed word
        guess: String,
    },

    /// Score the whole dictionary and write the difficulty CSV
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the Word,RawWSA,WSA table for later '--wsa table' runs
    ExportWsa {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Look a word up in a previously exported difficulty CSV
    Lookup {
        /// Word to look up
        word: String,

        /// Difficulty CSV written by 'export'
        #[arg(short, long)]
        table: PathBuf,
    },

    /// List the hardest (or easiest) dictionary words
    Rank {
        /// Number of words to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// Show the easiest words instead
        #[arg(short, long)]
        easiest: bool,
    },

    /// Fit the WSA approximation and report its error
    FitWsa {
        /// Number of worst-fit words to show
        #[arg(short, long, default_value = "10")]
        show: usize,
    },

    /// Play Wordle against a random dictionary word
    Play {
        /// Difficulty band: easy, moderate, hard, brutal
        #[arg(long)]
        band: Option<DifficultyBand>,
    },

    /// Guess which of two words is harder
    Duel {
        /// Number of rounds
        #[arg(short, long, default_value = "10")]
        rounds: usize,
    },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the optional tables named on the command line
fn load_sources(cli: &Cli) -> Result<Sources> {
    let frequencies = match &cli.frequencies {
        Some(path) => WordFrequencies::from_path(path)
            .with_context(|| format!("loading word frequencies from {}", path.display()))?,
        None => WordFrequencies::empty(),
    };
    let bigrams = match &cli.bigrams {
        Some(path) => BigramTable::from_path(path)
            .with_context(|| format!("loading bigram rarity from {}", path.display()))?,
        None => BigramTable::empty(),
    };
    let wsa_table = cli
        .wsa_table
        .as_ref()
        .map(|path| {
            WsaTable::from_path(path)
                .with_context(|| format!("loading WSA table from {}", path.display()))
        })
        .transpose()?;

    Ok(Sources {
        frequencies,
        bigrams,
        wsa_table,
    })
}

fn build_engine(cli: &Cli, dictionary: Dictionary) -> Result<Engine> {
    let openers = if cli.extended_openers {
        OpenerPanel::extended()
    } else {
        OpenerPanel::standard()
    };
    let config = ScoringConfig::new(openers, WsaMode::from_name(&cli.wsa));
    let sources = load_sources(cli)?;

    Engine::build(dictionary, sources, &config).context("building corpus statistics")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let dictionary = load_dictionary(&cli.dictionary)
        .with_context(|| format!("loading dictionary '{}'", cli.dictionary))?;

    match &cli.command {
        Commands::Feedback { target, guess } => {
            let report = analyze_feedback(target, guess, &dictionary)?;
            print_feedback_report(&report);
            Ok(())
        }
        Commands::Lookup { word, table } => run_lookup_command(word, table),
        command => {
            let engine = build_engine(&cli, dictionary)?;
            run_scoring_command(command, &engine)
        }
    }
}

fn run_lookup_command(word: &str, table: &Path) -> Result<()> {
    let report = lookup_word(word, table)
        .with_context(|| format!("reading difficulty table {}", table.display()))?;
    print_lookup(word, report.as_ref());
    Ok(())
}

fn run_scoring_command(command: &Commands, engine: &Engine) -> Result<()> {
    let scorer = engine.scorer();
    let dictionary = engine.dictionary();

    match command {
        Commands::Score { words } => {
            for report in score_words(words, &scorer, dictionary)? {
                print_score_report(&report);
            }
        }
        Commands::Export { output } => {
            let summary = run_export(&scorer, dictionary, output.as_deref())?;
            print_export_summary(&summary);
        }
        Commands::ExportWsa { output } => {
            let rows = run_export_wsa(dictionary, engine.statistics(), output.as_deref())?;
            if let Some(path) = output {
                println!("✅ Wrote {rows} WSA rows to {}", path.display());
            }
        }
        Commands::Rank { count, easiest } => {
            let order = if *easiest {
                RankOrder::Easiest
            } else {
                RankOrder::Hardest
            };
            print_ranking(&rank_dictionary(&scorer, dictionary, *count, order), order);
        }
        Commands::FitWsa { show } => {
            let summary = fit_wsa(dictionary, engine.statistics(), *show)?;
            print_fit_summary(&summary);
        }
        Commands::Play { band } => {
            run_play(&scorer, dictionary, *band)?;
        }
        Commands::Duel { rounds } => {
            run_duel(&scorer, dictionary, *rounds)?;
        }
        Commands::Feedback { .. } | Commands::Lookup { .. } => {}
    }

    Ok(())
}
