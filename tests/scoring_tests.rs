//! End-to-end scoring over small in-memory corpora

use wordle_difficulty::core::{FeedbackPattern, Word, feedback, feedback_str};
use wordle_difficulty::corpus::{Dictionary, OpenerPanel, Statistics, build_statistics};
use wordle_difficulty::features::{
    Feature, SimulatedWsa, WsaEstimator, obscurity_score, remap_frequency,
    repeated_letter_penalty,
};
use wordle_difficulty::scoring::{Engine, Scorer, Sources, weight};
use wordle_difficulty::tables::{BigramTable, WordFrequencies};
use wordle_difficulty::wordlists::loader::embedded_dictionary;
use wordle_difficulty::{DifficultyError, ScoringConfig};

const TOY: [&str; 10] = [
    "stare", "slate", "crane", "trace", "arise", "raise", "later", "alert", "jazzy", "fuzzy",
];

const BIGRAMS: &str = "\
bigram,log_rarity_score
ST,0.3
TA,0.5
AR,0.4
RE,0.2
SL,0.9
LA,0.6
AT,0.3
TE,0.4
CR,0.8
RA,0.5
AN,0.3
NE,0.4
TR,0.5
AC,0.7
CE,0.6
RI,0.6
IS,0.5
SE,0.5
AI,0.8
AL,0.5
ER,0.2
LE,0.4
RT,0.9
JA,7.5
AZ,6.0
ZZ,8.0
ZY,7.0
FU,4.0
UZ,6.5
";

const FREQUENCIES: &str = "\
word,frequency
stare,2500000
slate,1800000
crane,1200000
trace,3000000
arise,900000
raise,4000000
later,9000000
alert,2200000
jazzy,40000
fuzzy,60000
";

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

fn toy() -> (Dictionary, Statistics, WordFrequencies) {
    let dict = Dictionary::from_strs(&TOY).unwrap();
    let bigrams = BigramTable::from_reader(BIGRAMS.as_bytes()).unwrap();
    let stats = build_statistics(&dict, &bigrams).unwrap();
    let freqs = WordFrequencies::from_reader(FREQUENCIES.as_bytes()).unwrap();
    (dict, stats, freqs)
}

#[test]
fn common_unique_word_is_easier_than_rare_repeated_word() {
    let (_, stats, freqs) = toy();
    let scorer = Scorer::new(&stats, &freqs, SimulatedWsa);

    let stare = scorer.score("STARE").unwrap();
    let jazzy = scorer.score("JAZZY").unwrap();

    assert!(stare.ods < jazzy.ods, "{} vs {}", stare.ods, jazzy.ods);
    assert!(stare.expected_guesses < jazzy.expected_guesses);
    assert!((jazzy.features.hlt - 1.0).abs() < f64::EPSILON);
    assert!((jazzy.features.os - 1.0).abs() < f64::EPSILON);
}

#[test]
fn every_score_is_in_range() {
    let (dict, stats, freqs) = toy();
    let scorer = Scorer::new(&stats, &freqs, SimulatedWsa);

    for result in scorer.score_all(&dict) {
        for (feature, value) in result.features.iter() {
            assert!((0.0..=1.0).contains(&value), "{feature} = {value}");
        }
        assert!((0.0..=1.0).contains(&result.ods));
        assert!((2.5..=6.0).contains(&result.expected_guesses));
    }
}

#[test]
fn words_outside_the_dictionary_still_score() {
    let (_, stats, freqs) = toy();
    let scorer = Scorer::new(&stats, &freqs, SimulatedWsa);

    let result = scorer.score("qajaq").unwrap();
    assert!((result.features.hlt - 0.5).abs() < f64::EPSILON);
    assert!((result.features.os - 1.0).abs() < f64::EPSILON);
    assert!(result.features.is_normalized());
}

#[test]
fn invalid_words_are_rejected() {
    let (_, stats, freqs) = toy();
    let scorer = Scorer::new(&stats, &freqs, SimulatedWsa);

    for bad in ["", "four", "sixers", "cr4ne", "crâne"] {
        assert!(
            matches!(scorer.score(bad), Err(DifficultyError::InvalidWord(_))),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn scoring_is_deterministic() {
    let (_, stats, freqs) = toy();
    let first = Scorer::new(&stats, &freqs, SimulatedWsa).score("SLATE").unwrap();

    let (_, rebuilt, freqs) = toy();
    let second = Scorer::new(&rebuilt, &freqs, SimulatedWsa).score("SLATE").unwrap();

    assert_eq!(first, second);
}

#[test]
fn wsa_bounds_reach_both_ends() {
    let (dict, stats, _) = toy();
    let bounds = stats.wsa().bounds();

    let raws: Vec<(Word, f64)> = dict
        .iter()
        .map(|w| (*w, stats.wsa().raw(w).unwrap()))
        .collect();
    let (min_word, _) = raws.iter().min_by(|a, b| a.1.total_cmp(&b.1)).unwrap();
    let (max_word, _) = raws.iter().max_by(|a, b| a.1.total_cmp(&b.1)).unwrap();

    assert!(bounds.max > bounds.min);
    assert!(SimulatedWsa.estimate(min_word, &stats).abs() < f64::EPSILON);
    assert!((SimulatedWsa.estimate(max_word, &stats) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn hlt_ties_share_percentile() {
    let dict = Dictionary::from_strs(&["aaaaa", "bbbbb", "ccccc", "ddddd"]).unwrap();
    let bigrams: BigramTable = [("AA", 1.0), ("BB", 2.0), ("CC", 2.0), ("DD", 3.0)]
        .into_iter()
        .collect();
    let stats = build_statistics(&dict, &bigrams).unwrap();

    // Average ranks [1, 2.5, 2.5, 4] over n - 1 = 3
    assert_eq!(stats.hlt().get(&word("aaaaa")), Some(0.0));
    assert_eq!(stats.hlt().get(&word("bbbbb")), Some(0.5));
    assert_eq!(stats.hlt().get(&word("ccccc")), Some(0.5));
    assert_eq!(stats.hlt().get(&word("ddddd")), Some(1.0));
}

#[test]
fn feedback_properties() {
    for text in TOY {
        assert!(feedback(&word(text), &word(text)).is_all_correct());
    }
    assert_eq!(feedback_str("slate", "crane").unwrap().to_letters(), "BBGBG");
    assert_eq!(
        FeedbackPattern::parse("🟩🟨⬜⬜🟩"),
        FeedbackPattern::parse("GYBBG")
    );
}

#[test]
fn reference_feature_values() {
    assert!((repeated_letter_penalty(&word("ROBOT")) - 1.0).abs() < f64::EPSILON);
    assert!(repeated_letter_penalty(&word("CRANE")).abs() < f64::EPSILON);

    assert!((remap_frequency(2_000_000.0) - 0.5).abs() < f64::EPSILON);
    let unseen = obscurity_score(&word("xylyl"), &WordFrequencies::empty());
    assert!((unseen - 1.0).abs() < f64::EPSILON);
}

#[test]
fn weights_sum_to_one() {
    let total: f64 = Feature::ALL.iter().map(|&f| weight(f)).sum();
    assert!((total - 1.0).abs() < 1e-12);
}

#[test]
fn empty_corpus_is_rejected() {
    assert!(matches!(
        Dictionary::new(Vec::new()),
        Err(DifficultyError::CorpusEmpty)
    ));
    assert!(matches!(
        OpenerPanel::new(Vec::new()),
        Err(DifficultyError::EmptyPanel)
    ));
}

#[test]
fn engine_over_embedded_dictionary() {
    let dictionary = embedded_dictionary().unwrap();
    let size = dictionary.len();
    let engine = Engine::build(dictionary, Sources::default(), &ScoringConfig::default()).unwrap();

    assert_eq!(engine.statistics().dictionary_size(), size);
    let results = engine.scorer().score_all(engine.dictionary());
    assert_eq!(results.len(), size);
    assert!(results.iter().all(|r| r.features.is_normalized()));
}
