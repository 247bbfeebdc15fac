//! Index-aligned result sequences produced by a scan.

use super::params::ScanVariable;
use crate::error::{PeriodogramError, Result};
use crate::utils::stats::finite_or_nan;

/// Kind of value stored in a result sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coordinate {
    Frequency,
    Period,
    Power,
    SemiAmplitude,
    FStatistic,
    PValue,
}

impl Coordinate {
    /// Human-readable column label.
    pub fn label(&self) -> &'static str {
        match self {
            Coordinate::Frequency => "Frequency",
            Coordinate::Period => "Period",
            Coordinate::Power => "Power",
            Coordinate::SemiAmplitude => "Semi-amplitude",
            Coordinate::FStatistic => "F-statistic",
            Coordinate::PValue => "p-value",
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Value pair returned by a method for one trial point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticTuple {
    /// Statistic ranked by the top-hit extractor (power, F-statistic).
    pub primary: f64,
    /// Companion value (semi-amplitude, p-value).
    pub secondary: f64,
}

impl StatisticTuple {
    pub fn new(primary: f64, secondary: f64) -> Self {
        Self { primary, secondary }
    }

    /// Both values undefined.
    pub fn undefined() -> Self {
        Self {
            primary: f64::NAN,
            secondary: f64::NAN,
        }
    }
}

/// One row of a [`ResultSeries`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultRow {
    pub frequency: f64,
    pub period: f64,
    pub primary: f64,
    pub secondary: f64,
}

/// Parallel frequency / period / primary / secondary sequences.
///
/// All four sequences always have the same length and row `i` of each
/// belongs to the same trial point. Rows are appended in scan order and are
/// never reordered.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSeries {
    variable: ScanVariable,
    primary_kind: Coordinate,
    secondary_kind: Coordinate,
    frequencies: Vec<f64>,
    periods: Vec<f64>,
    primary: Vec<f64>,
    secondary: Vec<f64>,
}

impl ResultSeries {
    /// Create an empty result series.
    pub fn new(variable: ScanVariable, primary_kind: Coordinate, secondary_kind: Coordinate) -> Self {
        Self::with_capacity(variable, primary_kind, secondary_kind, 0)
    }

    pub fn with_capacity(
        variable: ScanVariable,
        primary_kind: Coordinate,
        secondary_kind: Coordinate,
        capacity: usize,
    ) -> Self {
        Self {
            variable,
            primary_kind,
            secondary_kind,
            frequencies: Vec::with_capacity(capacity),
            periods: Vec::with_capacity(capacity),
            primary: Vec::with_capacity(capacity),
            secondary: Vec::with_capacity(capacity),
        }
    }

    /// Build a series from existing columns of equal length.
    pub fn from_columns(
        variable: ScanVariable,
        primary_kind: Coordinate,
        secondary_kind: Coordinate,
        frequencies: Vec<f64>,
        periods: Vec<f64>,
        primary: Vec<f64>,
        secondary: Vec<f64>,
    ) -> Result<Self> {
        let n = frequencies.len();
        for len in [periods.len(), primary.len(), secondary.len()] {
            if len != n {
                return Err(PeriodogramError::DimensionMismatch {
                    expected: n,
                    got: len,
                });
            }
        }
        Ok(Self {
            variable,
            primary_kind,
            secondary_kind,
            frequencies,
            periods,
            primary,
            secondary,
        })
    }

    /// Append a row; infinite values are stored as `NaN`.
    pub fn push(&mut self, row: ResultRow) {
        self.frequencies.push(finite_or_nan(row.frequency));
        self.periods.push(finite_or_nan(row.period));
        self.primary.push(finite_or_nan(row.primary));
        self.secondary.push(finite_or_nan(row.secondary));
    }

    /// Append the row for trial value `x` of the scan variable.
    pub fn push_trial(&mut self, x: f64, stat: StatisticTuple) {
        let (frequency, period) = match self.variable {
            ScanVariable::Frequency => (x, 1.0 / x),
            ScanVariable::Period => (1.0 / x, x),
        };
        self.push(ResultRow {
            frequency,
            period,
            primary: stat.primary,
            secondary: stat.secondary,
        });
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Rows that fit before the columns reallocate.
    pub fn capacity(&self) -> usize {
        self.frequencies.capacity()
    }

    /// The coordinate the scan stepped through.
    pub fn scan_variable(&self) -> ScanVariable {
        self.variable
    }

    pub fn primary_kind(&self) -> Coordinate {
        self.primary_kind
    }

    pub fn secondary_kind(&self) -> Coordinate {
        self.secondary_kind
    }

    /// The four coordinates in column order.
    pub fn coordinates(&self) -> [Coordinate; 4] {
        [
            Coordinate::Frequency,
            Coordinate::Period,
            self.primary_kind,
            self.secondary_kind,
        ]
    }

    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn periods(&self) -> &[f64] {
        &self.periods
    }

    pub fn primary(&self) -> &[f64] {
        &self.primary
    }

    pub fn secondary(&self) -> &[f64] {
        &self.secondary
    }

    /// Values of the scanned coordinate, in scan order.
    pub fn scan_values(&self) -> &[f64] {
        match self.variable {
            ScanVariable::Frequency => &self.frequencies,
            ScanVariable::Period => &self.periods,
        }
    }

    /// Look up a sequence by coordinate kind.
    pub fn get(&self, coordinate: Coordinate) -> Option<&[f64]> {
        match coordinate {
            Coordinate::Frequency => Some(&self.frequencies),
            Coordinate::Period => Some(&self.periods),
            c if c == self.primary_kind => Some(&self.primary),
            c if c == self.secondary_kind => Some(&self.secondary),
            _ => None,
        }
    }

    /// Row `i`, if present.
    pub fn row(&self, i: usize) -> Option<ResultRow> {
        Some(ResultRow {
            frequency: *self.frequencies.get(i)?,
            period: *self.periods.get(i)?,
            primary: *self.primary.get(i)?,
            secondary: *self.secondary.get(i)?,
        })
    }

    /// Iterate over rows in scan order.
    pub fn rows(&self) -> impl Iterator<Item = ResultRow> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }

    /// New series of the same shape holding the given rows in the given order.
    pub fn select(&self, indices: &[usize]) -> Self {
        let mut selected = Self::with_capacity(
            self.variable,
            self.primary_kind,
            self.secondary_kind,
            indices.len(),
        );
        for row in indices.iter().filter_map(|&i| self.row(i)) {
            selected.push(row);
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fourier_series() -> ResultSeries {
        ResultSeries::new(
            ScanVariable::Frequency,
            Coordinate::Power,
            Coordinate::SemiAmplitude,
        )
    }

    #[test]
    fn push_trial_derives_reciprocal() {
        let mut series = fourier_series();
        series.push_trial(0.5, StatisticTuple::new(1.0, 0.2));
        series.push_trial(2.0, StatisticTuple::new(3.0, 0.4));

        assert_eq!(series.len(), 2);
        assert_eq!(series.frequencies(), &[0.5, 2.0]);
        assert_eq!(series.periods(), &[2.0, 0.5]);
        assert_eq!(series.primary(), &[1.0, 3.0]);
        assert_eq!(series.secondary(), &[0.2, 0.4]);
        assert_eq!(series.scan_values(), series.frequencies());
    }

    #[test]
    fn zero_frequency_period_is_nan() {
        let mut series = fourier_series();
        series.push_trial(0.0, StatisticTuple::new(f64::INFINITY, 1.0));

        assert_eq!(series.frequencies()[0], 0.0);
        assert!(series.periods()[0].is_nan());
        assert!(series.primary()[0].is_nan());
    }

    #[test]
    fn period_scan_derives_frequency() {
        let mut series =
            ResultSeries::new(ScanVariable::Period, Coordinate::FStatistic, Coordinate::PValue);
        series.push_trial(4.0, StatisticTuple::new(10.0, 0.01));

        assert_eq!(series.frequencies(), &[0.25]);
        assert_eq!(series.scan_values(), &[4.0]);
        assert_eq!(series.get(Coordinate::FStatistic), Some(&[10.0][..]));
        assert_eq!(series.get(Coordinate::PValue), Some(&[0.01][..]));
        assert_eq!(series.get(Coordinate::Power), None);
    }

    #[test]
    fn coordinates_in_column_order() {
        let series = fourier_series();
        assert_eq!(
            series.coordinates(),
            [
                Coordinate::Frequency,
                Coordinate::Period,
                Coordinate::Power,
                Coordinate::SemiAmplitude
            ]
        );
        assert_eq!(Coordinate::FStatistic.to_string(), "F-statistic");
    }

    #[test]
    fn from_columns_checks_lengths() {
        let err = ResultSeries::from_columns(
            ScanVariable::Frequency,
            Coordinate::Power,
            Coordinate::SemiAmplitude,
            vec![1.0, 2.0],
            vec![1.0, 0.5],
            vec![3.0],
            vec![0.0, 0.0],
        )
        .unwrap_err();
        assert_eq!(err, PeriodogramError::DimensionMismatch { expected: 2, got: 1 });
    }

    #[test]
    fn select_keeps_requested_order() {
        let mut series = fourier_series();
        for (i, p) in [1.0, 5.0, 3.0].iter().enumerate() {
            series.push_trial(1.0 + i as f64, StatisticTuple::new(*p, 0.0));
        }
        let picked = series.select(&[1, 2]);
        assert_eq!(picked.primary(), &[5.0, 3.0]);
        assert_eq!(picked.frequencies(), &[2.0, 3.0]);
        assert_eq!(series.rows().count(), 3);
    }
}
