//! Period-search algorithms.
//!
//! This module provides the periodogram methods and the machinery shared by
//! all of them:
//! - [`Method`]: the selectable statistics (AoV, Deeming DFT, spectral
//!   window, DCDFT, multi-harmonic DFT)
//! - [`scan`]: the fixed-resolution scan loop with cooperative interruption
//! - [`TopHitSet`]: ranked local maxima of a finished scan
//! - [`PeriodSearch`]: validation, scan and top-hit extraction in one call

mod anova;
mod aov;
mod fold;
mod fourier;
mod harmonic_fit;
mod harmonics;
mod method;
mod scanner;
mod search;
mod top_hits;
mod trig;

pub use anova::{f_upper_tail, one_way_anova, AnovaResult};
pub use aov::{AovConfig, AovStatistic};
pub use fold::{phase, EpochStrategy, FoldedSeries, PhaseBin, PhasedObservation};
pub use fourier::{transform, FourierStatistic, SpectralWindowNormalization};
pub use harmonic_fit::{validate_harmonics, zero_frequency_cut, HarmonicFitStatistic, MAX_HARMONICS};
pub use harmonics::{find_harmonics, Harmonic, DEFAULT_HARMONIC_TOLERANCE, FUNDAMENTAL};
pub use method::{Method, Statistic, TrialStatistic};
pub use scanner::{scan, Scan};
pub use search::{PeriodAnalysis, PeriodSearch, RunOutcome, DEFAULT_AOV_TOP_HITS};
pub use top_hits::{local_maxima, TopHit, TopHitLimit, TopHitSet};
pub use trig::{TrigKernel, HALF_ANGLE_LIMIT};
