//! Analysis of Variance (AoV) period search.
//!
//! For every trial period the series is folded, binned in phase and scored
//! with a one-way ANOVA F-statistic (Schwarzenberg-Czerny 1989). A strongly
//! periodic signal folded on its true period gives tight, well separated
//! bins and therefore a large F.

use super::anova::one_way_anova;
use super::fold::{EpochStrategy, FoldedSeries};
use super::method::TrialStatistic;
use crate::core::{Coordinate, ObservationSeries, ScanVariable, StatisticTuple};
use crate::error::{PeriodogramError, Result};

/// Configuration of the AoV method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AovConfig {
    /// Number of equal-width phase bins.
    pub bins: usize,
    /// Choice of phase-zero epoch.
    pub epoch: EpochStrategy,
}

impl Default for AovConfig {
    fn default() -> Self {
        Self {
            bins: 10,
            epoch: EpochStrategy::Earliest,
        }
    }
}

impl AovConfig {
    pub fn new(bins: usize) -> Self {
        Self {
            bins,
            ..Self::default()
        }
    }

    /// Set the number of phase bins.
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    /// Set the epoch strategy.
    pub fn with_epoch(mut self, epoch: EpochStrategy) -> Self {
        self.epoch = epoch;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.bins == 0 {
            return Err(PeriodogramError::InvalidParameter(
                "number of bins must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// AoV statistic bound to one series.
#[derive(Debug, Clone)]
pub struct AovStatistic<'a> {
    series: &'a ObservationSeries,
    bins: usize,
    epoch: f64,
    folded: FoldedSeries,
}

impl<'a> AovStatistic<'a> {
    pub fn new(series: &'a ObservationSeries, config: &AovConfig) -> Result<Self> {
        config.validate()?;
        let epoch = config.epoch.epoch(series);
        Ok(Self {
            series,
            bins: config.bins,
            epoch,
            folded: FoldedSeries::default(),
        })
    }

    /// Epoch used for folding.
    pub fn epoch(&self) -> f64 {
        self.epoch
    }

    /// Working copy from the most recent trial period.
    pub fn folded(&self) -> &FoldedSeries {
        &self.folded
    }

    /// F-statistic and p-value for one trial period.
    pub fn evaluate(&mut self, period: f64) -> StatisticTuple {
        if !(period > 0.0) || !period.is_finite() {
            return StatisticTuple::undefined();
        }
        self.folded.refold(self.series, self.epoch, period);
        let bins = self.folded.bins(self.bins);

        match one_way_anova(&bins) {
            Some(anova) => StatisticTuple::new(anova.f_statistic, anova.p_value),
            None => StatisticTuple::undefined(),
        }
    }
}

impl TrialStatistic for AovStatistic<'_> {
    fn name(&self) -> &'static str {
        "AoV"
    }

    fn scan_variable(&self) -> ScanVariable {
        ScanVariable::Period
    }

    fn coordinates(&self) -> (Coordinate, Coordinate) {
        (Coordinate::FStatistic, Coordinate::PValue)
    }

    fn compute(&mut self, period: f64) -> Result<StatisticTuple> {
        Ok(self.evaluate(period))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sine_series(n: usize, period: f64) -> ObservationSeries {
        // slightly irregular sampling
        let times: Vec<f64> = (0..n)
            .map(|i| i as f64 * 0.173 + 0.031 * ((i * 7) % 5) as f64)
            .collect();
        let mags: Vec<f64> = times.iter().map(|t| (2.0 * PI * t / period).sin()).collect();
        ObservationSeries::from_columns(times, mags).unwrap()
    }

    #[test]
    fn config_defaults_and_validation() {
        let config = AovConfig::default();
        assert_eq!(config.bins, 10);
        assert_eq!(config.epoch, EpochStrategy::Earliest);
        assert!(config.validate().is_ok());

        let err = AovConfig::new(0).validate().unwrap_err();
        assert!(err.is_parameter_error());

        let config = AovConfig::default()
            .with_bins(4)
            .with_epoch(EpochStrategy::Fixed(1.0));
        assert_eq!(config, AovConfig { bins: 4, epoch: EpochStrategy::Fixed(1.0) });
    }

    #[test]
    fn true_period_beats_wrong_period() {
        let series = sine_series(300, 3.7);
        let mut aov = AovStatistic::new(&series, &AovConfig::default()).unwrap();

        let at_true = aov.evaluate(3.7);
        let off = aov.evaluate(3.1);
        assert!(at_true.primary > 10.0 * off.primary);
        assert!(at_true.secondary < 1e-10);
        assert!(at_true.secondary <= off.secondary);
    }

    #[test]
    fn degenerate_periods_are_nan() {
        let series = sine_series(50, 2.0);
        let mut aov = AovStatistic::new(&series, &AovConfig::default()).unwrap();

        assert!(aov.evaluate(0.0).primary.is_nan());
        assert!(aov.evaluate(-1.0).primary.is_nan());
        assert!(aov.evaluate(f64::NAN).secondary.is_nan());
    }

    #[test]
    fn constant_magnitudes_are_nan() {
        let series =
            ObservationSeries::from_columns((0..20).map(|i| i as f64).collect(), vec![3.0; 20])
                .unwrap();
        let mut aov = AovStatistic::new(&series, &AovConfig::new(4)).unwrap();
        let stat = aov.compute(3.3).unwrap();
        assert!(stat.primary.is_nan());
        assert!(stat.secondary.is_nan());
    }

    #[test]
    fn caller_series_is_not_reordered() {
        let series = sine_series(30, 2.5);
        let before = series.times().to_vec();
        let mut aov = AovStatistic::new(&series, &AovConfig::default()).unwrap();
        aov.evaluate(1.3);
        assert_eq!(series.times(), before.as_slice());
        assert_eq!(aov.folded().len(), 30);
        assert_eq!(aov.epoch(), series.summary().min_time);
    }
}
