//! Linear approximation of WSA
//!
//! A ridge regression from cheap per-word features (letter scores, bigram
//! percentile and the opener-panel shape) onto the simulated WSA. Once fitted
//! it scores words outside the dictionary without a table, at the cost of
//! some accuracy.

use super::{SimulatedWsa, WsaEstimator};
use crate::core::Word;
use crate::corpus::{Dictionary, OpenerPanel, OpenerPartitions, Statistics};
use crate::error::{DifficultyError, Result};
use crate::features::{
    ShapeFeatures, hard_letter_transitions, letter_frequency_score,
    positional_letter_frequency_score, repeated_letter_penalty,
};
use crate::normalize::{clamp_unit, round3};
use nalgebra::{DMatrix, DVector};
use rayon::prelude::*;
use tracing::{debug, info};

/// LFS, PLFS, RLP, HLT and the five shape features
const INPUTS: usize = 9;

/// Regression inputs, in weight order
pub const INPUT_NAMES: [&str; INPUTS] = [
    "LFS",
    "PLFS",
    "RLP",
    "HLT",
    "MatchReduction",
    "AvgElimination",
    "FeedbackGreen",
    "FeedbackYellow",
    "FeedbackGray",
];

/// Ridge penalty, scaled by the number of training samples
pub const RIDGE_LAMBDA: f64 = 1e-3;

/// Every fifth word is held out of training
const HOLDOUT_STRIDE: usize = 5;

/// Columns with less variance than this are left unscaled
const MIN_VARIANCE: f64 = 1e-12;

/// Fit quality of an [`ApproximateWsa`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitReport {
    /// Training words
    pub train_samples: usize,
    /// Held-out words
    pub held_out_samples: usize,
    /// Mean squared error on the training words
    pub train_mse: f64,
    /// Mean squared error on the held-out words, if any were held out
    pub held_out_mse: Option<f64>,
}

/// Fitted WSA approximation
#[derive(Debug, Clone)]
pub struct ApproximateWsa {
    partitions: OpenerPartitions,
    means: DVector<f64>,
    scales: DVector<f64>,
    weights: DVector<f64>,
    intercept: f64,
}

impl ApproximateWsa {
    /// Fit against the simulated WSA of every dictionary word, using the
    /// extended opener panel for shape features
    ///
    /// # Errors
    /// Returns `FitFailed` if there are fewer than two training words or the
    /// normal equations cannot be factored.
    pub fn fit(dictionary: &Dictionary, stats: &Statistics) -> Result<(Self, FitReport)> {
        Self::fit_with_panel(dictionary, stats, &OpenerPanel::extended())
    }

    /// Fit using a custom panel for shape features
    ///
    /// # Errors
    /// See [`ApproximateWsa::fit`].
    pub fn fit_with_panel(
        dictionary: &Dictionary,
        stats: &Statistics,
        panel: &OpenerPanel,
    ) -> Result<(Self, FitReport)> {
        let partitions = OpenerPartitions::build(dictionary, panel);

        let rows: Vec<([f64; INPUTS], f64)> = dictionary
            .words()
            .par_iter()
            .map(|word| {
                (
                    inputs(word, stats, &partitions),
                    SimulatedWsa.estimate(word, stats),
                )
            })
            .collect();

        let (train, held_out): (Vec<_>, Vec<_>) = rows
            .into_iter()
            .enumerate()
            .partition(|(i, _)| i % HOLDOUT_STRIDE != HOLDOUT_STRIDE - 1);
        let train: Vec<_> = train.into_iter().map(|(_, row)| row).collect();
        let held_out: Vec<_> = held_out.into_iter().map(|(_, row)| row).collect();

        if train.len() < 2 {
            return Err(DifficultyError::FitFailed(format!(
                "need at least two training words, have {}",
                train.len()
            )));
        }
        debug!(
            train = train.len(),
            held_out = held_out.len(),
            "fitting WSA approximation"
        );

        let (means, scales) = standardization(&train);
        let design = DMatrix::from_fn(train.len(), INPUTS, |i, j| {
            (train[i].0[j] - means[j]) / scales[j]
        });
        let targets = DVector::from_iterator(train.len(), train.iter().map(|(_, y)| *y));

        let n = train.len() as f64;
        let intercept = targets.mean();

        // (ZᵀZ + λnI) w = Zᵀ(y - ȳ)
        let ridge = DMatrix::<f64>::identity(INPUTS, INPUTS) * (RIDGE_LAMBDA * n);
        let gram = design.tr_mul(&design) + ridge;
        let moment = design.tr_mul(&targets.add_scalar(-intercept));
        let weights = gram
            .cholesky()
            .map(|factor| factor.solve(&moment))
            .ok_or_else(|| {
                DifficultyError::FitFailed("normal equations are not positive definite".to_string())
            })?;

        let model = Self {
            partitions,
            means,
            scales,
            weights,
            intercept,
        };

        let report = FitReport {
            train_samples: train.len(),
            held_out_samples: held_out.len(),
            train_mse: model.mse(&train),
            held_out_mse: (!held_out.is_empty()).then(|| model.mse(&held_out)),
        };
        info!(
            train_mse = report.train_mse,
            held_out_mse = ?report.held_out_mse,
            "WSA approximation fitted"
        );

        Ok((model, report))
    }

    /// Coefficients on the standardized inputs
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        self.weights.as_slice()
    }

    #[must_use]
    pub const fn intercept(&self) -> f64 {
        self.intercept
    }

    fn predict(&self, x: &[f64; INPUTS]) -> f64 {
        let z = (DVector::from_row_slice(x) - &self.means).component_div(&self.scales);
        clamp_unit(self.intercept + z.dot(&self.weights))
    }

    fn mse(&self, rows: &[([f64; INPUTS], f64)]) -> f64 {
        let total: f64 = rows
            .iter()
            .map(|(x, y)| (self.predict(x) - y).powi(2))
            .sum();
        total / rows.len() as f64
    }
}

impl WsaEstimator for ApproximateWsa {
    fn estimate(&self, word: &Word, stats: &Statistics) -> f64 {
        round3(self.predict(&inputs(word, stats, &self.partitions)))
    }

    fn name(&self) -> &'static str {
        "approximate"
    }
}

fn inputs(word: &Word, stats: &Statistics, partitions: &OpenerPartitions) -> [f64; INPUTS] {
    let shape = ShapeFeatures::compute(word, partitions).to_array();
    [
        letter_frequency_score(word, stats),
        positional_letter_frequency_score(word, stats),
        repeated_letter_penalty(word),
        hard_letter_transitions(word, stats),
        shape[0],
        shape[1],
        shape[2],
        shape[3],
        shape[4],
    ]
}

/// Column means and population standard deviations; constant columns get
/// scale 1
fn standardization(rows: &[([f64; INPUTS], f64)]) -> (DVector<f64>, DVector<f64>) {
    let raw = DMatrix::from_fn(rows.len(), INPUTS, |i, j| rows[i].0[j]);
    let means = DVector::from_fn(INPUTS, |j, _| raw.column(j).mean());
    let scales = DVector::from_fn(INPUTS, |j, _| {
        let variance = raw.column(j).variance();
        if variance > MIN_VARIANCE {
            variance.sqrt()
        } else {
            1.0
        }
    });
    (means, scales)
}
