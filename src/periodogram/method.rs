//! Period-search methods and the per-trial-point statistic interface.
//!
//! A [`Method`] is a small closed set of strategies selected by the caller.
//! Binding a method to a series with [`Method::bind`] precomputes whatever
//! the strategy needs once per series and returns a [`Statistic`] that the
//! scanner evaluates at every trial point:
//! - [`Method::Aov`]: phase-binned ANOVA over trial periods
//! - [`Method::Deeming`]: Deeming DFT over trial frequencies
//! - [`Method::SpectralWindow`]: DFT of the sampling pattern
//! - [`Method::Dcdft`]: date-compensated DFT
//! - [`Method::MultiHarmonic`]: least-squares fit with several harmonics

use super::aov::{AovConfig, AovStatistic};
use super::fourier::{FourierStatistic, SpectralWindowNormalization};
use super::harmonic_fit::{validate_harmonics, HarmonicFitStatistic};
use super::trig::TrigKernel;
use crate::core::{Coordinate, ObservationSeries, ScanVariable, StatisticTuple};
use crate::error::Result;

/// Statistic evaluated once per trial point by the scanner.
pub trait TrialStatistic {
    /// Display name of the method.
    fn name(&self) -> &'static str;

    /// Coordinate stepped through by the scan.
    fn scan_variable(&self) -> ScanVariable;

    /// Kinds of the primary and secondary values.
    fn coordinates(&self) -> (Coordinate, Coordinate);

    /// Evaluate the statistic at trial value `x`.
    ///
    /// Numeric degeneracies are returned as `NaN` values; an `Err` aborts
    /// the scan.
    fn compute(&mut self, x: f64) -> Result<StatisticTuple>;

    /// Trial points evaluated so far that had to be reported as `NaN`
    /// because the underlying computation failed.
    fn degraded_points(&self) -> usize {
        0
    }
}

/// Period-search method selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Method {
    /// Analysis of variance over phase bins; scans period.
    Aov(AovConfig),
    /// Deeming DFT of the mean-subtracted magnitudes; scans frequency.
    Deeming { kernel: TrigKernel },
    /// Spectral window of the sample times; scans frequency.
    SpectralWindow {
        normalization: SpectralWindowNormalization,
        kernel: TrigKernel,
    },
    /// Date-compensated DFT; scans frequency.
    Dcdft { kernel: TrigKernel },
    /// Multi-harmonic least-squares DFT; scans frequency.
    MultiHarmonic { harmonics: usize, kernel: TrigKernel },
}

impl Default for Method {
    fn default() -> Self {
        Method::deeming()
    }
}

impl Method {
    /// AoV with 10 bins and the earliest-time epoch.
    pub fn aov() -> Self {
        Method::Aov(AovConfig::default())
    }

    pub fn deeming() -> Self {
        Method::Deeming {
            kernel: TrigKernel::default(),
        }
    }

    pub fn spectral_window(normalization: SpectralWindowNormalization) -> Self {
        Method::SpectralWindow {
            normalization,
            kernel: TrigKernel::default(),
        }
    }

    pub fn dcdft() -> Self {
        Method::Dcdft {
            kernel: TrigKernel::default(),
        }
    }

    pub fn multi_harmonic(harmonics: usize) -> Self {
        Method::MultiHarmonic {
            harmonics,
            kernel: TrigKernel::default(),
        }
    }

    /// Replace the trigonometric kernel. No effect on AoV.
    pub fn with_kernel(self, kernel: TrigKernel) -> Self {
        match self {
            Method::Aov(config) => Method::Aov(config),
            Method::Deeming { .. } => Method::Deeming { kernel },
            Method::SpectralWindow { normalization, .. } => Method::SpectralWindow {
                normalization,
                kernel,
            },
            Method::Dcdft { .. } => Method::Dcdft { kernel },
            Method::MultiHarmonic { harmonics, .. } => Method::MultiHarmonic { harmonics, kernel },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Method::Aov(_) => "AoV",
            Method::Deeming { .. } => "DFT (Deeming)",
            Method::SpectralWindow { .. } => "Spectral Window",
            Method::Dcdft { .. } => "DCDFT",
            Method::MultiHarmonic { .. } => "Multi-harmonic DFT",
        }
    }

    pub fn scan_variable(&self) -> ScanVariable {
        match self {
            Method::Aov(_) => ScanVariable::Period,
            _ => ScanVariable::Frequency,
        }
    }

    /// Check method-specific parameters (bin count, harmonic count).
    pub fn validate(&self) -> Result<()> {
        match self {
            Method::Aov(config) => config.validate(),
            Method::MultiHarmonic { harmonics, .. } => validate_harmonics(*harmonics),
            _ => Ok(()),
        }
    }

    /// Precompute per-series state and return the trial-point statistic.
    pub fn bind<'a>(&self, series: &'a ObservationSeries) -> Result<Statistic<'a>> {
        self.validate()?;
        let statistic = match *self {
            Method::Aov(config) => Statistic::Aov(AovStatistic::new(series, &config)?),
            Method::Deeming { kernel } => {
                Statistic::Fourier(FourierStatistic::deeming(series, kernel))
            }
            Method::SpectralWindow {
                normalization,
                kernel,
            } => Statistic::Fourier(FourierStatistic::spectral_window(
                series,
                normalization,
                kernel,
            )),
            Method::Dcdft { kernel } => {
                Statistic::HarmonicFit(HarmonicFitStatistic::dcdft(series, kernel)?)
            }
            Method::MultiHarmonic { harmonics, kernel } => Statistic::HarmonicFit(
                HarmonicFitStatistic::multi_harmonic(series, harmonics, kernel)?,
            ),
        };
        Ok(statistic)
    }
}

/// A [`Method`] bound to one series.
#[derive(Debug, Clone)]
pub enum Statistic<'a> {
    Aov(AovStatistic<'a>),
    Fourier(FourierStatistic<'a>),
    HarmonicFit(HarmonicFitStatistic<'a>),
}

impl TrialStatistic for Statistic<'_> {
    fn name(&self) -> &'static str {
        match self {
            Statistic::Aov(s) => s.name(),
            Statistic::Fourier(s) => s.name(),
            Statistic::HarmonicFit(s) => s.name(),
        }
    }

    fn scan_variable(&self) -> ScanVariable {
        match self {
            Statistic::Aov(s) => s.scan_variable(),
            Statistic::Fourier(s) => s.scan_variable(),
            Statistic::HarmonicFit(s) => s.scan_variable(),
        }
    }

    fn coordinates(&self) -> (Coordinate, Coordinate) {
        match self {
            Statistic::Aov(s) => s.coordinates(),
            Statistic::Fourier(s) => s.coordinates(),
            Statistic::HarmonicFit(s) => s.coordinates(),
        }
    }

    fn compute(&mut self, x: f64) -> Result<StatisticTuple> {
        match self {
            Statistic::Aov(s) => s.compute(x),
            Statistic::Fourier(s) => s.compute(x),
            Statistic::HarmonicFit(s) => s.compute(x),
        }
    }

    fn degraded_points(&self) -> usize {
        match self {
            Statistic::Aov(s) => s.degraded_points(),
            Statistic::Fourier(s) => s.degraded_points(),
            Statistic::HarmonicFit(s) => s.degraded_points(),
        }
    }
}
