//! Observation series: the immutable `(time, magnitude)` input of every method.

use crate::error::{PeriodogramError, Result};
use crate::utils::stats::{mean, median_positive_interval, population_variance};

/// A single `(time, magnitude)` measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Observation time (e.g. Julian Day).
    pub time: f64,
    /// Measured magnitude.
    pub magnitude: f64,
}

impl Observation {
    pub fn new(time: f64, magnitude: f64) -> Self {
        Self { time, magnitude }
    }
}

impl From<(f64, f64)> for Observation {
    fn from((time, magnitude): (f64, f64)) -> Self {
        Self { time, magnitude }
    }
}

/// Validated, immutable sequence of observations stored column-wise.
///
/// Summary statistics used by the methods (mean magnitude, variances,
/// sampling interval) are computed once at construction.
#[derive(Debug, Clone)]
pub struct ObservationSeries {
    times: Vec<f64>,
    magnitudes: Vec<f64>,
    summary: SeriesSummary,
}

/// Summary statistics of an [`ObservationSeries`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub min_time: f64,
    pub max_time: f64,
    pub mean_time: f64,
    /// Population variance of the observation times.
    pub time_variance: f64,
    pub mean_magnitude: f64,
    /// Population variance of the magnitudes.
    pub magnitude_variance: f64,
    /// Median of the positive gaps between sorted observation times.
    pub median_interval: f64,
}

impl SeriesSummary {
    /// Time covered by the observations.
    pub fn time_span(&self) -> f64 {
        self.max_time - self.min_time
    }
}

impl ObservationSeries {
    /// Create a series from observations, rejecting empty or non-finite input.
    pub fn new(observations: &[Observation]) -> Result<Self> {
        let times = observations.iter().map(|o| o.time).collect();
        let magnitudes = observations.iter().map(|o| o.magnitude).collect();
        Self::from_columns(times, magnitudes)
    }

    /// Create a series from parallel time and magnitude columns.
    pub fn from_columns(times: Vec<f64>, magnitudes: Vec<f64>) -> Result<Self> {
        if times.is_empty() {
            return Err(PeriodogramError::EmptyData);
        }
        if times.len() != magnitudes.len() {
            return Err(PeriodogramError::DimensionMismatch {
                expected: times.len(),
                got: magnitudes.len(),
            });
        }
        if let Some(index) = times
            .iter()
            .zip(&magnitudes)
            .position(|(t, m)| !t.is_finite() || !m.is_finite())
        {
            return Err(PeriodogramError::NonFiniteObservation { index });
        }

        let summary = SeriesSummary {
            min_time: times.iter().copied().fold(f64::INFINITY, f64::min),
            max_time: times.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            mean_time: mean(&times),
            time_variance: population_variance(&times),
            mean_magnitude: mean(&magnitudes),
            magnitude_variance: population_variance(&magnitudes),
            median_interval: median_positive_interval(&times),
        };

        Ok(Self {
            times,
            magnitudes,
            summary,
        })
    }

    /// Get the number of observations.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always false for a constructed series; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitudes
    }

    /// Get observation `i`, if present.
    pub fn get(&self, i: usize) -> Option<Observation> {
        Some(Observation::new(*self.times.get(i)?, *self.magnitudes.get(i)?))
    }

    /// Iterate over the observations in input order.
    pub fn iter(&self) -> impl Iterator<Item = Observation> + '_ {
        self.times
            .iter()
            .zip(&self.magnitudes)
            .map(|(&t, &m)| Observation::new(t, m))
    }

    pub fn summary(&self) -> &SeriesSummary {
        &self.summary
    }
}
