//! Phase folding and equal-width phase binning.
//!
//! Folding maps each observation time onto `[0, 1)` with
//! `phase = frac((time - epoch) / period)`. The folded working copy is sorted
//! by phase and partitioned into `bins` contiguous intervals
//! `[k / bins, (k + 1) / bins)`.

use crate::core::ObservationSeries;

/// How the phase-zero reference time is chosen for a series.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EpochStrategy {
    /// Earliest observation time.
    #[default]
    Earliest,
    /// Midpoint of the earliest and latest observation times.
    MidRange,
    /// A caller-supplied epoch.
    Fixed(f64),
}

impl EpochStrategy {
    /// Epoch for `series` under this strategy.
    pub fn epoch(&self, series: &ObservationSeries) -> f64 {
        let summary = series.summary();
        match *self {
            EpochStrategy::Earliest => summary.min_time,
            EpochStrategy::MidRange => (summary.min_time + summary.max_time) / 2.0,
            EpochStrategy::Fixed(epoch) => epoch,
        }
    }
}

/// Phase of `time` in `[0, 1)` for the given epoch and period.
#[inline]
pub fn phase(time: f64, epoch: f64, period: f64) -> f64 {
    let p = ((time - epoch) / period).rem_euclid(1.0);
    // rem_euclid rounds tiny negative inputs up to exactly 1.0
    if p >= 1.0 {
        0.0
    } else {
        p
    }
}

/// Copy of one observation annotated with its phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhasedObservation {
    pub phase: f64,
    pub time: f64,
    pub magnitude: f64,
}

/// Occupancy and spread of one phase bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseBin {
    /// Bin number `k` in `0..bins`.
    pub index: usize,
    /// Number of observations whose phase falls in the bin.
    pub count: usize,
    /// Mean magnitude, `NaN` for an empty bin.
    pub mean: f64,
    /// Sum of squared deviations from the bin mean.
    pub sum_squares: f64,
}

impl PhaseBin {
    /// Summarise the magnitudes that fell into bin `index`.
    pub fn summarize(index: usize, magnitudes: &[f64]) -> Self {
        if magnitudes.is_empty() {
            return Self {
                index,
                count: 0,
                mean: f64::NAN,
                sum_squares: 0.0,
            };
        }
        let mean = magnitudes.iter().sum::<f64>() / magnitudes.len() as f64;
        let sum_squares = magnitudes.iter().map(|m| (m - mean).powi(2)).sum();
        Self {
            index,
            count: magnitudes.len(),
            mean,
            sum_squares,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Lower phase edge of the bin.
    pub fn lower(&self, bins: usize) -> f64 {
        self.index as f64 / bins as f64
    }

    /// Phase at the centre of the bin.
    pub fn centre(&self, bins: usize) -> f64 {
        (self.index as f64 + 0.5) / bins as f64
    }
}

/// Working copy of a series folded on one trial period, sorted by phase.
///
/// The buffer is reused across trial periods; the caller's series is never
/// mutated.
#[derive(Debug, Clone, Default)]
pub struct FoldedSeries {
    rows: Vec<PhasedObservation>,
    epoch: f64,
    period: f64,
}

impl FoldedSeries {
    /// Fold `series` on `period` about `epoch`.
    pub fn fold(series: &ObservationSeries, epoch: f64, period: f64) -> Self {
        let mut folded = Self {
            rows: Vec::with_capacity(series.len()),
            epoch,
            period,
        };
        folded.refold(series, epoch, period);
        folded
    }

    /// Re-fold into the existing buffer, starting from input order.
    pub fn refold(&mut self, series: &ObservationSeries, epoch: f64, period: f64) {
        self.epoch = epoch;
        self.period = period;
        self.rows.clear();
        self.rows.extend(series.iter().map(|ob| PhasedObservation {
            phase: phase(ob.time, epoch, period),
            time: ob.time,
            magnitude: ob.magnitude,
        }));
        self.rows.sort_by(|a, b| a.phase.total_cmp(&b.phase));
    }

    pub fn rows(&self) -> &[PhasedObservation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn epoch(&self) -> f64 {
        self.epoch
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    /// Partition the sorted rows into `bins` equal-width phase bins.
    ///
    /// Every bin is reported, including empty ones (`count == 0`).
    pub fn bins(&self, bins: usize) -> Vec<PhaseBin> {
        if bins == 0 {
            return Vec::new();
        }
        let mut result = Vec::with_capacity(bins);
        let mut magnitudes = Vec::new();
        let mut start = 0;

        for k in 0..bins {
            let upper = (k + 1) as f64 / bins as f64;
            let mut end = start;
            // last bin absorbs everything left so no row is dropped
            while end < self.rows.len() && (k + 1 == bins || self.rows[end].phase < upper) {
                end += 1;
            }
            magnitudes.clear();
            magnitudes.extend(self.rows[start..end].iter().map(|r| r.magnitude));
            result.push(PhaseBin::summarize(k, &magnitudes));
            start = end;
        }

        result
    }
}
