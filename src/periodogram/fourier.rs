//! Deeming discrete Fourier transform and spectral window.
//!
//! Both compute the complex sum
//!
//! ```text
//! F(ν) = Σ b_i · (cos 2πνt_i + i·sin 2πνt_i)
//! ```
//!
//! over the raw sample times and differ only in the weights `b_i` and the
//! amplitude scale. The Deeming transform uses mean-subtracted magnitudes;
//! the spectral window uses a constant surrogate so that its peaks show the
//! aliasing produced by the sampling pattern alone.

use super::method::TrialStatistic;
use super::trig::TrigKernel;
use crate::core::{Coordinate, ObservationSeries, ScanVariable, StatisticTuple};
use crate::error::Result;
use std::f64::consts::TAU;

/// Surrogate amplitude and scaling of the spectral window.
///
/// The two variants are kept apart rather than reconciled: each is a
/// self-contained convention and callers pick the one they compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpectralWindowNormalization {
    /// `b_i = 0.5`, amplitude `2·|F| / N` (the Deeming scaling).
    #[default]
    Deeming,
    /// `b_i = 1`, amplitude `|F| / N`.
    Unit,
}

impl SpectralWindowNormalization {
    fn weight(self) -> f64 {
        match self {
            SpectralWindowNormalization::Deeming => 0.5,
            SpectralWindowNormalization::Unit => 1.0,
        }
    }

    fn scale(self) -> f64 {
        match self {
            SpectralWindowNormalization::Deeming => 2.0,
            SpectralWindowNormalization::Unit => 1.0,
        }
    }
}

/// Real and imaginary parts of `Σ w_i · exp(2πiνt_i)`.
pub fn transform(times: &[f64], weights: &[f64], frequency: f64, kernel: TrigKernel) -> (f64, f64) {
    let mut re = 0.0;
    let mut im = 0.0;
    for (&t, &w) in times.iter().zip(weights) {
        let (c, s) = kernel.cos_sin(TAU * frequency * t);
        re += w * c;
        im += w * s;
    }
    (re, im)
}

/// Fourier statistic bound to one series: power and semi-amplitude per
/// trial frequency.
#[derive(Debug, Clone)]
pub struct FourierStatistic<'a> {
    name: &'static str,
    times: &'a [f64],
    weights: Vec<f64>,
    scale: f64,
    kernel: TrigKernel,
}

impl<'a> FourierStatistic<'a> {
    /// Deeming DFT of the mean-subtracted magnitudes.
    pub fn deeming(series: &'a ObservationSeries, kernel: TrigKernel) -> Self {
        let mean = series.summary().mean_magnitude;
        Self {
            name: "DFT (Deeming)",
            times: series.times(),
            weights: series.magnitudes().iter().map(|m| m - mean).collect(),
            scale: 2.0,
            kernel,
        }
    }

    /// Spectral window of the sampling times.
    pub fn spectral_window(
        series: &'a ObservationSeries,
        normalization: SpectralWindowNormalization,
        kernel: TrigKernel,
    ) -> Self {
        Self {
            name: "Spectral Window",
            times: series.times(),
            weights: vec![normalization.weight(); series.len()],
            scale: normalization.scale(),
            kernel,
        }
    }

    pub fn kernel(&self) -> TrigKernel {
        self.kernel
    }

    /// `(power, semi-amplitude)` at `frequency`.
    pub fn evaluate(&self, frequency: f64) -> StatisticTuple {
        let (re, im) = transform(self.times, &self.weights, frequency, self.kernel);
        let amplitude = self.scale * re.hypot(im) / self.times.len() as f64;
        StatisticTuple::new(amplitude * amplitude, amplitude)
    }
}

impl TrialStatistic for FourierStatistic<'_> {
    fn name(&self) -> &'static str {
        self.name
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
}
