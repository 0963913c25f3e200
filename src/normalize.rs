//! Normalization utilities shared by the corpus builder and feature functions
//!
//! Rounding, average-rank percentiles, min-max scaling and the piecewise
//! rescale used by the letter frequency score.

use std::cmp::Ordering;

/// Round to 3 decimal places (the precision of every published score)
///
/// Rounds the exact decimal value of `value`, so `0.6865` (stored just below
/// the midpoint) becomes `0.686`.
#[must_use]
pub fn round3(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.3}").parse().unwrap_or(value)
}

/// Clamp to the unit interval
#[inline]
#[must_use]
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// 1-based ranks with ties sharing the mean of the ranks they span
///
/// Matches the conventional "average" ranking method: `[10, 20, 20, 30]`
/// ranks as `[1, 2.5, 2.5, 4]`.
///
/// # Examples
/// ```
/// use wordle_difficulty::normalize::average_ranks;
///
/// assert_eq!(average_ranks(&[10.0, 20.0, 20.0, 30.0]), vec![1.0, 2.5, 2.5, 4.0]);
/// ```
#[must_use]
pub fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start;
        while end + 1 < order.len()
            && values[order[end + 1]].total_cmp(&values[order[start]]) == Ordering::Equal
        {
            end += 1;
        }

        // Positions start..=end hold ranks start+1..=end+1
        let shared = (start + end) as f64 / 2.0 + 1.0;
        for &idx in &order[start..=end] {
            ranks[idx] = shared;
        }
        start = end + 1;
    }

    ranks
}

/// Percentile of each value: `(rank - 1) / (n - 1)` using average ranks
///
/// The lowest value maps to 0, the highest to 1. A single value maps to 0.
#[must_use]
pub fn percentile_ranks(values: &[f64]) -> Vec<f64> {
    if values.len() <= 1 {
        return vec![0.0; values.len()];
    }

    let denominator = (values.len() - 1) as f64;
    average_ranks(values)
        .into_iter()
        .map(|rank| (rank - 1.0) / denominator)
        .collect()
}

/// Corpus-wide bounds for min-max normalization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax {
    pub min: f64,
    pub max: f64,
}

impl MinMax {
    /// Bounds of a set of values, `None` if empty
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |bounds, v| {
            Some(match bounds {
                None => Self { min: v, max: v },
                Some(Self { min, max }) => Self {
                    min: min.min(v),
                    max: max.max(v),
                },
            })
        })
    }

    /// Width of the interval
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Scale into [0, 1], clamping values outside the bounds
    ///
    /// A zero-width interval maps everything to 0.
    #[must_use]
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            return 0.0;
        }
        clamp_unit((value - self.min) / span)
    }
}

/// Stretch `raw` so that `[0, breakpoint]` maps to `[0, 0.5]` and anything
/// above continues with the same slope from 0.5
#[must_use]
pub fn piecewise_rescale(raw: f64, breakpoint: f64) -> f64 {
    let slope = 0.5 / breakpoint;
    if raw <= breakpoint {
        raw * slope
    } else {
        0.5 + (raw - breakpoint) * slope
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round3_rounds_to_thousandths() {
        assert!((round3(0.123_456) - 0.123).abs() < f64::EPSILON);
        assert!((round3(0.999_6) - 1.0).abs() < f64::EPSILON);
        assert!((round3(2.5) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn round3_uses_exact_decimal_value() {
        // Stored just below the midpoint
        assert!((round3(0.6865) - 0.686).abs() < f64::EPSILON);
        assert!((round3(0.1235) - 0.123).abs() < f64::EPSILON);
        // Stored just above the midpoint
        assert!((round3(0.0005) - 0.001).abs() < f64::EPSILON);
        assert!((round3(0.0025) - 0.003).abs() < f64::EPSILON);
        assert!((round3(1.0005) - 1.0).abs() < f64::EPSILON);
        assert!((round3(-0.1235) + 0.123).abs() < f64::EPSILON);
    }

    #[test]
    fn round3_passes_non_finite_through() {
        assert!(round3(f64::NAN).is_nan());
        assert_eq!(round3(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn average_ranks_distinct() {
        assert_eq!(average_ranks(&[3.0, 1.0, 2.0]), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn average_ranks_ties_share_mean() {
        assert_eq!(
            average_ranks(&[0.5, 0.5, 0.5, 0.1]),
            vec![3.0, 3.0, 3.0, 1.0]
        );
    }

    #[test]
    fn average_ranks_empty() {
        assert!(average_ranks(&[]).is_empty());
    }

    #[test]
    fn percentile_ranks_span_unit_interval() {
        let p = percentile_ranks(&[5.0, 1.0, 3.0]);
        assert_eq!(p, vec![1.0, 0.0, 0.5]);
    }

    #[test]
    fn percentile_ranks_with_ties() {
        // ranks [1, 2.5, 2.5, 4] over n-1 = 3
        let p = percentile_ranks(&[1.0, 2.0, 2.0, 3.0]);
        assert!((p[1] - 0.5).abs() < 1e-12);
        assert!((p[2] - 0.5).abs() < 1e-12);
        assert!((p[3] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn percentile_ranks_single_value() {
        assert_eq!(percentile_ranks(&[42.0]), vec![0.0]);
    }

    #[test]
    fn min_max_bounds_and_normalize() {
        let bounds = MinMax::from_values([4.0, 2.0, 10.0]).unwrap();
        assert!((bounds.min - 2.0).abs() < f64::EPSILON);
        assert!((bounds.max - 10.0).abs() < f64::EPSILON);
        assert!((bounds.normalize(6.0) - 0.5).abs() < f64::EPSILON);
        assert!((bounds.normalize(20.0) - 1.0).abs() < f64::EPSILON);
        assert!(bounds.normalize(0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn min_max_degenerate() {
        assert!(MinMax::from_values(std::iter::empty()).is_none());
        let flat = MinMax::from_values([3.0, 3.0]).unwrap();
        assert!(flat.normalize(3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn piecewise_rescale_breakpoints() {
        assert!(piecewise_rescale(0.0, 0.4).abs() < f64::EPSILON);
        assert!((piecewise_rescale(0.2, 0.4) - 0.25).abs() < 1e-12);
        assert!((piecewise_rescale(0.4, 0.4) - 0.5).abs() < 1e-12);
        assert!((piecewise_rescale(0.8, 0.4) - 1.0).abs() < 1e-12);
    }
}
