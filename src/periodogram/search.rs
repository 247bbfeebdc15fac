//! End-to-end period search: validate, scan, extract top hits.

use super::harmonics::{find_harmonics, Harmonic};
use super::method::{Method, TrialStatistic};
use super::scanner::scan;
use super::top_hits::{TopHitLimit, TopHitSet};
use crate::core::{
    ObservationSeries, ParameterProvider, ResultSeries, RunPhase, RunState, ScanParameters,
};
use crate::error::Result;

/// Default number of AoV top hits.
pub const DEFAULT_AOV_TOP_HITS: usize = 20;

/// A configured period search.
///
/// ```
/// use anofox_periodogram::prelude::*;
///
/// let series = ObservationSeries::from_columns(
///     vec![0.0, 0.25, 0.5, 0.75],
///     vec![0.0, 1.0, 0.0, -1.0],
/// )
/// .unwrap();
/// let search = PeriodSearch::new(Method::deeming()).with_top_hit_limit(TopHitLimit::AtMost(1));
/// let analysis = search
///     .run(&series, &ScanParameters::new(0.5, 1.5, 0.5), &RunState::new())
///     .unwrap();
///
/// assert_eq!(analysis.results.len(), 3);
/// assert_eq!(analysis.top_hits.scan_order_indices(), vec![1]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSearch {
    pub method: Method,
    pub top_hit_limit: TopHitLimit,
}

impl Default for PeriodSearch {
    fn default() -> Self {
        Self::new(Method::default())
    }
}

impl PeriodSearch {
    /// Search with the method's default top-hit limit: 20 for AoV,
    /// unbounded otherwise.
    pub fn new(method: Method) -> Self {
        let top_hit_limit = match method {
            Method::Aov(_) => TopHitLimit::AtMost(DEFAULT_AOV_TOP_HITS),
            _ => TopHitLimit::Unbounded,
        };
        Self {
            method,
            top_hit_limit,
        }
    }

    pub fn with_top_hit_limit(mut self, limit: impl Into<TopHitLimit>) -> Self {
        self.top_hit_limit = limit.into();
        self
    }

    /// Validate, scan and extract top hits.
    ///
    /// `state` is reset first and then reflects the run's progress. Errors
    /// leave it back in [`RunPhase::Idle`]; on success it ends in
    /// [`RunPhase::Complete`] or [`RunPhase::Interrupted`].
    pub fn run(
        &self,
        series: &ObservationSeries,
        params: &ScanParameters,
        state: &RunState,
    ) -> Result<PeriodAnalysis> {
        state.reset();
        self.run_validated(series, params, state).inspect_err(|err| {
            state.set_phase(RunPhase::Idle);
            tracing::debug!(method = self.method.name(), error = %err, "period search failed");
        })
    }

    /// Ask `provider` for parameters, then run.
    ///
    /// A provider that returns `None` cancels the run: nothing is scanned
    /// and `state` ends in [`RunPhase::Cancelled`].
    pub fn run_with_provider<P>(
        &self,
        series: &ObservationSeries,
        provider: &mut P,
        state: &RunState,
    ) -> Result<RunOutcome>
    where
        P: ParameterProvider + ?Sized,
    {
        state.reset();
        match provider.scan_parameters(series) {
            Some(params) => self.run(series, &params, state).map(RunOutcome::Finished),
            None => {
                state.cancel();
                state.set_phase(RunPhase::Cancelled);
                tracing::info!(method = self.method.name(), "parameter collection cancelled");
                Ok(RunOutcome::Cancelled)
            }
        }
    }

    fn run_validated(
        &self,
        series: &ObservationSeries,
        params: &ScanParameters,
        state: &RunState,
    ) -> Result<PeriodAnalysis> {
        state.set_phase(RunPhase::Validating);
        params.validate()?;
        let mut statistic = self.method.bind(series)?;

        state.set_phase(RunPhase::Scanning);
        let scanned = scan(&mut statistic, params, state)?;
        state.set_phase(scanned.phase);

        let degraded_points = statistic.degraded_points();
        if degraded_points > 0 {
            tracing::warn!(
                method = statistic.name(),
                degraded_points,
                "some trial points could not be evaluated and were set to NaN"
            );
        }

        let top_hits = TopHitSet::extract(&scanned.results, self.top_hit_limit);
        Ok(PeriodAnalysis {
            method: statistic.name(),
            phase: scanned.phase,
            results: scanned.results,
            top_hits,
            degraded_points,
        })
    }
}

/// Result of a provider-driven run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// Parameter collection was cancelled before scanning.
    Cancelled,
    Finished(PeriodAnalysis),
}

impl RunOutcome {
    pub fn analysis(&self) -> Option<&PeriodAnalysis> {
        match self {
            RunOutcome::Cancelled => None,
            RunOutcome::Finished(analysis) => Some(analysis),
        }
    }

    pub fn into_analysis(self) -> Option<PeriodAnalysis> {
        match self {
            RunOutcome::Cancelled => None,
            RunOutcome::Finished(analysis) => Some(analysis),
        }
    }
}

/// Frozen output of one period search.
#[derive(Debug, Clone)]
pub struct PeriodAnalysis {
    /// Name of the method that produced the results.
    pub method: &'static str,
    /// [`RunPhase::Complete`] or [`RunPhase::Interrupted`].
    pub phase: RunPhase,
    pub results: ResultSeries,
    pub top_hits: TopHitSet,
    /// Trial points reported as `NaN` because the computation failed.
    pub degraded_points: usize,
}

impl PeriodAnalysis {
    pub fn is_complete(&self) -> bool {
        self.phase == RunPhase::Complete
    }

    /// Top hits as a result series in scan order, for plotting.
    pub fn top_hits_in_scan_order(&self) -> ResultSeries {
        self.top_hits.scan_order_series(&self.results)
    }

    /// Top hits as a result series in significance order, for tabulation.
    pub fn top_hits_by_significance(&self) -> ResultSeries {
        self.top_hits.significance_series(&self.results)
    }

    /// Harmonics of the best top hit among the scanned frequencies.
    pub fn harmonics_of_best(&self, tolerance: f64) -> Vec<Harmonic> {
        self.top_hits
            .best()
            .map(|hit| find_harmonics(hit.row.frequency, self.results.frequencies(), tolerance))
            .unwrap_or_default()
    }
}
