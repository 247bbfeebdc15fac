//! Fixed-resolution scan over frequency or period.

use super::method::TrialStatistic;
use crate::core::{ResultSeries, RunPhase, RunState, ScanParameters};
use crate::error::Result;

/// Rows reserved up front; longer scans grow the columns as they go.
const INITIAL_CAPACITY: usize = 1 << 16;

/// Outcome of one scan: the accumulated rows and how the loop ended.
#[derive(Debug, Clone)]
pub struct Scan {
    pub results: ResultSeries,
    /// [`RunPhase::Complete`] or [`RunPhase::Interrupted`].
    pub phase: RunPhase,
}

impl Scan {
    pub fn is_complete(&self) -> bool {
        self.phase == RunPhase::Complete
    }
}

/// Evaluate `statistic` at `min + i * resolution` for every step of `params`.
///
/// `state` is polled before each step; once it reports an interrupt the loop
/// stops and the rows gathered so far are returned with
/// [`RunPhase::Interrupted`]. A statistic evaluation that has started always
/// finishes. Parameter errors are returned before the first step.
pub fn scan<S>(statistic: &mut S, params: &ScanParameters, state: &RunState) -> Result<Scan>
where
    S: TrialStatistic + ?Sized,
{
    params.validate()?;

    let steps = params.step_count();
    let (primary, secondary) = statistic.coordinates();
    let mut results = ResultSeries::with_capacity(
        statistic.scan_variable(),
        primary,
        secondary,
        steps.min(INITIAL_CAPACITY),
    );

    tracing::debug!(
        method = statistic.name(),
        min = params.min,
        max = params.max,
        resolution = params.resolution,
        steps,
        "starting scan"
    );

    let mut phase = RunPhase::Complete;
    for i in 0..steps {
        if state.is_interrupted() {
            phase = RunPhase::Interrupted;
            break;
        }
        let x = params.value_at(i);
        let value = statistic.compute(x)?;
        results.push_trial(x, value);
    }

    match phase {
        RunPhase::Interrupted => tracing::info!(
            method = statistic.name(),
            completed = results.len(),
            steps,
            "scan interrupted"
        ),
        _ => tracing::debug!(method = statistic.name(), steps, "scan complete"),
    }

    Ok(Scan { results, phase })
}
