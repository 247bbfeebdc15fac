//! Scan parameters and their validation.

use super::observation::ObservationSeries;
use crate::error::{PeriodogramError, Result};

/// Upper bound on the number of trial points in a single scan.
pub const MAX_SCAN_STEPS: usize = 100_000_000;

/// Highest frequency ever suggested by [`ScanParameters::suggest_frequency_range`].
pub const MAX_SUGGESTED_FREQUENCY: f64 = 50.0;

/// Which coordinate a method steps through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanVariable {
    /// Trial frequencies; periods are derived as `1 / frequency`.
    Frequency,
    /// Trial periods; frequencies are derived as `1 / period`.
    Period,
}

/// Range and resolution of a scan over frequency or period.
///
/// Trial points are `min + i * resolution` for
/// `i in 0..ceil((max - min) / resolution) + 1`, so the last point may
/// overshoot `max` by less than one resolution step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanParameters {
    /// First trial value.
    pub min: f64,
    /// Last value that must be covered.
    pub max: f64,
    /// Step between consecutive trial values.
    pub resolution: f64,
}

impl Default for ScanParameters {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 0.0,
            resolution: 0.1,
        }
    }
}

impl ScanParameters {
    pub fn new(min: f64, max: f64, resolution: f64) -> Self {
        Self {
            min,
            max,
            resolution,
        }
    }

    /// Set the range minimum.
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    /// Set the range maximum.
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    /// Set the resolution.
    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    /// Check the range before any numeric work is done.
    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || !self.resolution.is_finite() {
            return Err(PeriodogramError::InvalidParameter(
                "range and resolution must be finite".into(),
            ));
        }
        if self.min >= self.max {
            return Err(PeriodogramError::InvalidParameter(format!(
                "minimum ({}) must be less than maximum ({})",
                self.min, self.max
            )));
        }
        if self.resolution <= 0.0 {
            return Err(PeriodogramError::InvalidParameter(format!(
                "resolution must be positive, got {}",
                self.resolution
            )));
        }
        let steps = ((self.max - self.min) / self.resolution).ceil();
        if !(steps < MAX_SCAN_STEPS as f64) {
            return Err(PeriodogramError::InvalidParameter(format!(
                "scan would need more than {} steps",
                MAX_SCAN_STEPS
            )));
        }
        Ok(())
    }

    /// Number of trial points: `ceil((max - min) / resolution) + 1`.
    ///
    /// Only meaningful for parameters that pass [`validate`](Self::validate).
    pub fn step_count(&self) -> usize {
        ((self.max - self.min) / self.resolution).ceil() as usize + 1
    }

    /// Trial value at step `i`.
    #[inline]
    pub fn value_at(&self, i: usize) -> f64 {
        self.min + i as f64 * self.resolution
    }

    /// Derive a frequency range from the sampling of `series`.
    ///
    /// The maximum approximates the Nyquist frequency from the median
    /// sampling interval (capped at 50 cycles per time unit) and the
    /// resolution is 1/20 of the natural peak width `1 / time_span`.
    pub fn suggest_frequency_range(series: &ObservationSeries) -> Result<Self> {
        if series.len() < 2 {
            return Err(PeriodogramError::InsufficientData {
                needed: 2,
                got: series.len(),
            });
        }
        let summary = series.summary();
        let interval = summary.median_interval;
        let span = summary.time_span();
        if interval <= 0.0 || span <= 0.0 {
            return Err(PeriodogramError::InvalidParameter(
                "observations must cover a positive time span".into(),
            ));
        }

        Ok(Self {
            min: 0.0,
            max: (0.5 / interval).min(MAX_SUGGESTED_FREQUENCY),
            resolution: 0.05 / span,
        })
    }
}

/// Source of scan parameters for a run, possibly interactive.
///
/// Returning `None` means parameter collection was cancelled; the run then
/// ends without scanning.
pub trait ParameterProvider {
    fn scan_parameters(&mut self, series: &ObservationSeries) -> Option<ScanParameters>;
}

impl ParameterProvider for ScanParameters {
    fn scan_parameters(&mut self, _series: &ObservationSeries) -> Option<ScanParameters> {
        Some(*self)
    }
}

impl ParameterProvider for Option<ScanParameters> {
    fn scan_parameters(&mut self, _series: &ObservationSeries) -> Option<ScanParameters> {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn step_count_matches_formula() {
        assert_eq!(ScanParameters::new(0.5, 1.5, 0.5).step_count(), 3);
        assert_eq!(ScanParameters::new(0.0, 1.0, 0.3).step_count(), 5);
        assert_eq!(ScanParameters::new(1.0, 2.0, 5.0).step_count(), 2);
    }

    #[test]
    fn values_are_min_plus_multiples_of_resolution() {
        let params = ScanParameters::new(0.5, 1.5, 0.5);
        assert_eq!(params.value_at(0), 0.5);
        assert_eq!(params.value_at(1), 1.0);
        assert_eq!(params.value_at(2), 1.5);
    }

    #[test]
    fn validation_rejects_bad_ranges() {
        assert!(ScanParameters::new(0.0, 1.0, 0.1).validate().is_ok());

        for params in [
            ScanParameters::new(1.0, 1.0, 0.1),
            ScanParameters::new(2.0, 1.0, 0.1),
            ScanParameters::new(0.0, 1.0, 0.0),
            ScanParameters::new(0.0, 1.0, -0.1),
            ScanParameters::new(f64::NAN, 1.0, 0.1),
            ScanParameters::new(0.0, f64::INFINITY, 0.1),
            ScanParameters::new(0.0, 1e12, 1e-6),
        ] {
            let err = params.validate().unwrap_err();
            assert!(err.is_parameter_error(), "{:?} should be rejected", params);
        }
    }

    #[test]
    fn builder_methods() {
        let params = ScanParameters::default()
            .with_min(1.0)
            .with_max(4.0)
            .with_resolution(0.25);
        assert_eq!(params, ScanParameters::new(1.0, 4.0, 0.25));
        assert_eq!(params.step_count(), 13);
    }

    #[test]
    fn suggested_range_from_sampling() {
        let times: Vec<f64> = (0..101).map(|i| i as f64 * 0.1).collect();
        let mags = vec![1.0; times.len()];
        let series = ObservationSeries::from_columns(times, mags).unwrap();

        let params = ScanParameters::suggest_frequency_range(&series).unwrap();
        assert_eq!(params.min, 0.0);
        assert_relative_eq!(params.max, 5.0, epsilon = 1e-9);
        assert_relative_eq!(params.resolution, 0.005, epsilon = 1e-12);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn suggested_range_is_capped() {
        let times: Vec<f64> = (0..10).map(|i| i as f64 * 0.001).collect();
        let series = ObservationSeries::from_columns(times, vec![0.0; 10]).unwrap();
        let params = ScanParameters::suggest_frequency_range(&series).unwrap();
        assert_eq!(params.max, MAX_SUGGESTED_FREQUENCY);
    }

    #[test]
    fn suggested_range_needs_spread_times() {
        let single = ObservationSeries::from_columns(vec![1.0], vec![1.0]).unwrap();
        assert!(ScanParameters::suggest_frequency_range(&single).is_err());

        let same = ObservationSeries::from_columns(vec![1.0, 1.0], vec![1.0, 2.0]).unwrap();
        assert!(ScanParameters::suggest_frequency_range(&same).is_err());
    }

    #[test]
    fn providers() {
        let series = ObservationSeries::from_columns(vec![0.0], vec![0.0]).unwrap();
        let mut fixed = ScanParameters::new(0.0, 1.0, 0.1);
        assert_eq!(fixed.scan_parameters(&series), Some(fixed));

        let mut cancelled: Option<ScanParameters> = None;
        assert_eq!(cancelled.scan_parameters(&series), None);
    }
}
