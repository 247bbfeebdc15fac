//! Core data structures for period search.

mod observation;
mod params;
mod result;
mod run_state;

pub use observation::{Observation, ObservationSeries, SeriesSummary};
pub use params::{
    ParameterProvider, ScanParameters, ScanVariable, MAX_SCAN_STEPS, MAX_SUGGESTED_FREQUENCY,
};
pub use result::{Coordinate, ResultRow, ResultSeries, StatisticTuple};
pub use run_state::{RunPhase, RunState};
