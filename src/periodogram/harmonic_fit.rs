//! Least-squares harmonic periodograms: date-compensated DFT (DCDFT) and the
//! multi-harmonic DFT.
//!
//! At every trial frequency `ν` the magnitudes are regressed on
//!
//! ```text
//! m(t) = c + Σ_{n=1..h} a_n cos(2π n ν t) + b_n sin(2π n ν t)
//! ```
//!
//! and the power is the share of magnitude variance explained by the
//! harmonic terms, `varp(fit − c) / varp(m)`. The DCDFT is the `h = 1` case
//! scaled by `(N − 1) / 2` (Ferraz-Mello 1981, Foster 1995).

use super::method::TrialStatistic;
use super::trig::TrigKernel;
use crate::core::{Coordinate, ObservationSeries, ScanVariable, StatisticTuple};
use crate::error::{PeriodogramError, Result};
use crate::utils::{ols_fit, population_variance, OLSResult};
use std::f64::consts::TAU;

/// Largest supported number of harmonics.
pub const MAX_HARMONICS: usize = 25;

/// Frequencies below this value are not evaluated by the harmonic fits.
///
/// Suppresses the large spurious peak near zero frequency, which comes from
/// the fit absorbing slow trends over the whole time span.
pub fn zero_frequency_cut(series: &ObservationSeries) -> f64 {
    0.95 / (12.0 * series.summary().time_variance).sqrt() / 4.0
}

/// Harmonic least-squares statistic bound to one series.
#[derive(Debug, Clone)]
pub struct HarmonicFitStatistic<'a> {
    series: &'a ObservationSeries,
    harmonics: usize,
    date_compensated: bool,
    kernel: TrigKernel,
    zero_cut: f64,
    columns: Vec<Vec<f64>>,
    degraded: usize,
}

impl<'a> HarmonicFitStatistic<'a> {
    /// Date-compensated DFT (single harmonic, scaled power).
    pub fn dcdft(series: &'a ObservationSeries, kernel: TrigKernel) -> Result<Self> {
        Self::build(series, 1, true, kernel)
    }

    /// Multi-harmonic DFT with `harmonics` terms.
    pub fn multi_harmonic(
        series: &'a ObservationSeries,
        harmonics: usize,
        kernel: TrigKernel,
    ) -> Result<Self> {
        Self::build(series, harmonics, false, kernel)
    }

    fn build(
        series: &'a ObservationSeries,
        harmonics: usize,
        date_compensated: bool,
        kernel: TrigKernel,
    ) -> Result<Self> {
        validate_harmonics(harmonics)?;
        let needed = 2 * harmonics + 1;
        if series.len() < needed {
            return Err(PeriodogramError::InsufficientData {
                needed,
                got: series.len(),
            });
        }

        Ok(Self {
            series,
            harmonics,
            date_compensated,
            kernel,
            zero_cut: zero_frequency_cut(series),
            columns: vec![vec![0.0; series.len()]; 2 * harmonics],
            degraded: 0,
        })
    }

    pub fn harmonics(&self) -> usize {
        self.harmonics
    }

    pub fn zero_cut(&self) -> f64 {
        self.zero_cut
    }

    /// `(power, semi-amplitude)` at `frequency`.
    ///
    /// Points below the zero-frequency cut, and points where the fit is
    /// singular, are `NaN`; the latter are counted in
    /// [`degraded_points`](TrialStatistic::degraded_points).
    pub fn evaluate(&mut self, frequency: f64) -> StatisticTuple {
        if !(frequency >= self.zero_cut) {
            return StatisticTuple::undefined();
        }

        let omega = TAU * frequency;
        for (i, &t) in self.series.times().iter().enumerate() {
            let angle = omega * t;
            for n in 0..self.harmonics {
                let (c, s) = self.kernel.cos_sin((n + 1) as f64 * angle);
                self.columns[2 * n][i] = c;
                self.columns[2 * n + 1][i] = s;
            }
        }

        let mags = self.series.magnitudes();
        let (fit, predicted) = match self.fit_columns(mags) {
            Ok(fitted) => fitted,
            Err(err) => {
                self.degraded += 1;
                tracing::debug!(frequency, error = %err, "harmonic fit failed");
                return StatisticTuple::undefined();
            }
        };

        let varp_mag = self.series.summary().magnitude_variance;
        let mut power = population_variance(&predicted) / varp_mag;
        if self.date_compensated {
            power *= (mags.len() - 1) as f64 / 2.0;
        }
        let amplitude = if self.harmonics == 1 {
            fit.coefficients[0].hypot(fit.coefficients[1])
        } else {
            f64::NAN
        };

        StatisticTuple::new(power, amplitude)
    }

    /// Regress `mags` on the current columns; returns the fit and its
    /// harmonic part.
    fn fit_columns(&self, mags: &[f64]) -> Result<(OLSResult, Vec<f64>)> {
        let fit = ols_fit(mags, &self.columns)?;
        let predicted = fit.fitted_without_intercept(&self.columns)?;
        Ok((fit, predicted))
    }
}

/// Harmonic count must be in `1..=MAX_HARMONICS`.
pub fn validate_harmonics(harmonics: usize) -> Result<()> {
    if harmonics == 0 || harmonics > MAX_HARMONICS {
        return Err(PeriodogramError::InvalidParameter(format!(
            "number of harmonics must be between 1 and {}, got {}",
            MAX_HARMONICS, harmonics
        )));
    }
    Ok(())
}

impl TrialStatistic for HarmonicFitStatistic<'_> {
    fn name(&self) -> &'static str {
        if self.date_compensated {
            "DCDFT"
        } else {
            "Multi-harmonic DFT"
        }
    }

    fn scan_variable(&self) -> ScanVariable {
        ScanVariable::Frequency
    }

    fn coordinates(&self) -> (Coordinate, Coordinate) {
        (Coordinate::Power, Coordinate::SemiAmplitude)
    }

    fn compute(&mut self, frequency: f64) -> Result<StatisticTuple> {
        Ok(self.evaluate(frequency))
    }

    fn degraded_points(&self) -> usize {
        self.degraded
    }
}
