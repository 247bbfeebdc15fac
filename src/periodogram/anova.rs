//! One-way analysis of variance over phase bins.
//!
//! The F-statistic compares the spread of bin means around the grand mean
//! (between-bin variance) with the pooled spread inside the bins
//! (within-bin variance). Empty bins carry no degrees of freedom and are left
//! out entirely.

use super::fold::PhaseBin;
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

/// Outcome of a one-way ANOVA.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnovaResult {
    /// Between-bin mean square over within-bin mean square.
    pub f_statistic: f64,
    /// Upper-tail probability of `f_statistic` under the F distribution.
    pub p_value: f64,
    /// Occupied bins minus one.
    pub df_between: usize,
    /// Observations minus occupied bins.
    pub df_within: usize,
}

/// One-way ANOVA over the occupied bins.
///
/// Returns `None` when the ratio is undefined: fewer than two occupied bins,
/// no within-bin degrees of freedom, or zero within-bin variance.
pub fn one_way_anova(bins: &[PhaseBin]) -> Option<AnovaResult> {
    let occupied: Vec<&PhaseBin> = bins.iter().filter(|b| !b.is_empty()).collect();
    let k = occupied.len();
    let n: usize = occupied.iter().map(|b| b.count).sum();

    if k < 2 || n <= k {
        return None;
    }

    let grand_mean = occupied
        .iter()
        .map(|b| b.count as f64 * b.mean)
        .sum::<f64>()
        / n as f64;

    let ss_between: f64 = occupied
        .iter()
        .map(|b| b.count as f64 * (b.mean - grand_mean).powi(2))
        .sum();
    let ss_within: f64 = occupied.iter().map(|b| b.sum_squares).sum();

    if !(ss_within > 0.0) {
        return None;
    }

    let df_between = k - 1;
    let df_within = n - k;
    let f_statistic = (ss_between / df_between as f64) / (ss_within / df_within as f64);

    Some(AnovaResult {
        f_statistic,
        p_value: f_upper_tail(f_statistic, df_between, df_within),
        df_between,
        df_within,
    })
}

/// `P(X > f)` for `X ~ F(d1, d2)`, `NaN` when undefined.
pub fn f_upper_tail(f: f64, d1: usize, d2: usize) -> f64 {
    if !f.is_finite() || d1 == 0 || d2 == 0 {
        return f64::NAN;
    }
    FisherSnedecor::new(d1 as f64, d2 as f64)
        .map(|dist| dist.sf(f))
        .unwrap_or(f64::NAN)
}
