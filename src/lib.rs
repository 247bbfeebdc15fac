//! # anofox-periodogram
//!
//! Period search for irregularly sampled time series.
//!
//! Scans a range of trial frequencies or periods over a series of
//! `(time, magnitude)` observations and reports how strongly the data are
//! periodic at each trial point, together with the ranked local maxima
//! ("top hits"). Methods include Analysis of Variance (AoV) over phase bins,
//! the Deeming DFT, the spectral window, the date-compensated DFT and a
//! multi-harmonic least-squares DFT.
//!
//! Scans are single-threaded and can be interrupted cooperatively from
//! another thread through a shared [`RunState`](core::RunState) handle.

// Allow some clippy warnings for cleaner code in specific cases
#![allow(clippy::too_many_arguments)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::neg_cmp_op_on_partial_ord)]

pub mod core;
pub mod error;
pub mod periodogram;
pub mod utils;

pub use error::{PeriodogramError, Result};

pub mod prelude {
    pub use crate::core::{
        Coordinate, Observation, ObservationSeries, ParameterProvider, ResultSeries, RunPhase,
        RunState, ScanParameters, ScanVariable,
    };
    pub use crate::error::{PeriodogramError, Result};
    pub use crate::periodogram::{
        AovConfig, EpochStrategy, Method, PeriodAnalysis, PeriodSearch, RunOutcome,
        SpectralWindowNormalization, TopHitLimit, TopHitSet, TrialStatistic, TrigKernel,
    };
}
