//! Top-hit extraction: local maxima of the primary statistic, ranked by
//! significance and pruned to a bounded count.

use crate::core::{ResultRow, ResultSeries};
use std::cmp::Ordering;

/// Bound on the number of retained top hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopHitLimit {
    /// Keep every local maximum.
    #[default]
    Unbounded,
    /// Keep at most this many, highest significance first.
    AtMost(usize),
}

impl TopHitLimit {
    /// Maximum count, `None` when unbounded.
    pub fn max(&self) -> Option<usize> {
        match self {
            TopHitLimit::Unbounded => None,
            TopHitLimit::AtMost(k) => Some(*k),
        }
    }
}

/// Negative counts mean unbounded.
impl From<i64> for TopHitLimit {
    fn from(value: i64) -> Self {
        if value < 0 {
            TopHitLimit::Unbounded
        } else {
            TopHitLimit::AtMost(value as usize)
        }
    }
}

impl From<Option<usize>> for TopHitLimit {
    fn from(value: Option<usize>) -> Self {
        value.map_or(TopHitLimit::Unbounded, TopHitLimit::AtMost)
    }
}

/// Indices of strict local maxima of `values`.
///
/// Index `i` qualifies when `values[i]` is greater than each neighbour that
/// exists. End points only have one neighbour. Comparisons against `NaN`
/// fail, so neither a `NaN` value nor a point beside one qualifies.
pub fn local_maxima(values: &[f64]) -> Vec<usize> {
    let n = values.len();
    (0..n)
        .filter(|&i| {
            let v = values[i];
            let above_prev = i == 0 || values[i - 1] < v;
            let above_next = i + 1 == n || values[i + 1] < v;
            above_prev && above_next
        })
        .collect()
}

/// One retained peak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopHit {
    /// Index of the row in the scanned [`ResultSeries`].
    pub index: usize,
    pub row: ResultRow,
}

/// Retained local maxima of one scan.
///
/// Holds the hits once in significance order (primary statistic descending,
/// ties by scan index) together with a permutation giving scan order.
#[derive(Debug, Clone, PartialEq)]
pub struct TopHitSet {
    ranked: Vec<TopHit>,
    scan_order: Vec<usize>,
    total_local_maxima: usize,
}

impl TopHitSet {
    /// Extract the top hits of a frozen result series.
    pub fn extract(results: &ResultSeries, limit: TopHitLimit) -> Self {
        let primary = results.primary();
        let maxima = local_maxima(primary);
        let total_local_maxima = maxima.len();

        let mut ranked: Vec<TopHit> = maxima
            .into_iter()
            .filter_map(|index| results.row(index).map(|row| TopHit { index, row }))
            .collect();
        ranked.sort_by(|a, b| {
            b.row
                .primary
                .partial_cmp(&a.row.primary)
                .unwrap_or(Ordering::Equal)
                .then(a.index.cmp(&b.index))
        });
        if let Some(k) = limit.max() {
            ranked.truncate(k);
        }

        let mut scan_order: Vec<usize> = (0..ranked.len()).collect();
        scan_order.sort_by_key(|&i| ranked[i].index);

        Self {
            ranked,
            scan_order,
            total_local_maxima,
        }
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Local maxima found before pruning.
    pub fn total_local_maxima(&self) -> usize {
        self.total_local_maxima
    }

    /// The highest-significance hit.
    pub fn best(&self) -> Option<&TopHit> {
        self.ranked.first()
    }

    /// Hits by descending primary statistic.
    pub fn by_significance(&self) -> impl Iterator<Item = &TopHit> + '_ {
        self.ranked.iter()
    }

    /// Hits in ascending scan order.
    pub fn by_scan_order(&self) -> impl Iterator<Item = &TopHit> + '_ {
        self.scan_order.iter().map(move |&i| &self.ranked[i])
    }

    pub fn significance_indices(&self) -> Vec<usize> {
        self.by_significance().map(|hit| hit.index).collect()
    }

    pub fn scan_order_indices(&self) -> Vec<usize> {
        self.by_scan_order().map(|hit| hit.index).collect()
    }

    /// The hits as a result series in significance order.
    pub fn significance_series(&self, results: &ResultSeries) -> ResultSeries {
        results.select(&self.significance_indices())
    }

    /// The hits as a result series in scan order.
    pub fn scan_order_series(&self, results: &ResultSeries) -> ResultSeries {
        results.select(&self.scan_order_indices())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coordinate, ScanVariable, StatisticTuple};

    fn results(values: &[f64]) -> ResultSeries {
        let mut series = ResultSeries::new(
            ScanVariable::Frequency,
            Coordinate::Power,
            Coordinate::SemiAmplitude,
        );
        for (i, &v) in values.iter().enumerate() {
            series.push_trial(1.0 + i as f64, StatisticTuple::new(v, v.sqrt()));
        }
        series
    }

    #[test]
    fn local_maxima_rule() {
        assert_eq!(local_maxima(&[1.0, 3.0, 2.0, 5.0, 4.0]), vec![1, 3]);
        assert_eq!(local_maxima(&[5.0, 1.0, 2.0]), vec![0, 2]);
        assert_eq!(local_maxima(&[1.0, 2.0, 2.0, 1.0]), Vec::<usize>::new());
        assert_eq!(local_maxima(&[3.0]), vec![0]);
        assert!(local_maxima(&[]).is_empty());
    }

    #[test]
    fn nan_neighbours_disqualify() {
        assert!(local_maxima(&[f64::NAN, 5.0, 1.0]).is_empty());
        assert!(local_maxima(&[0.5, f64::NAN, 0.7]).is_empty());
        assert_eq!(local_maxima(&[f64::NAN, 1.0, 3.0, 2.0, f64::NAN]), vec![2]);
        assert!(local_maxima(&[f64::NAN]).is_empty());
    }

    #[test]
    fn undefined_prefix_yields_no_edge_hit() {
        let series = results(&[f64::NAN, f64::NAN, 8.0, 2.0, 5.0, 1.0]);
        let hits = TopHitSet::extract(&series, TopHitLimit::Unbounded);
        assert_eq!(hits.significance_indices(), vec![4]);
        assert_eq!(hits.best().map(|h| h.index), Some(4));
    }

    #[test]
    fn ranked_and_scan_orders() {
        let series = results(&[1.0, 4.0, 2.0, 9.0, 3.0, 6.0, 0.0]);
        let hits = TopHitSet::extract(&series, TopHitLimit::Unbounded);

        assert_eq!(hits.len(), 3);
        assert_eq!(hits.significance_indices(), vec![3, 5, 1]);
        assert_eq!(hits.scan_order_indices(), vec![1, 3, 5]);
        assert_eq!(hits.best().map(|h| h.index), Some(3));

        let ranked = hits.significance_series(&series);
        assert_eq!(ranked.primary(), &[9.0, 6.0, 4.0]);
        let plotted = hits.scan_order_series(&series);
        assert_eq!(plotted.frequencies(), &[2.0, 4.0, 6.0]);
    }

    #[test]
    fn pruning_keeps_most_significant() {
        let series = results(&[1.0, 4.0, 2.0, 9.0, 3.0, 6.0, 0.0]);
        let hits = TopHitSet::extract(&series, TopHitLimit::AtMost(2));

        assert_eq!(hits.len(), 2);
        assert_eq!(hits.total_local_maxima(), 3);
        assert_eq!(hits.significance_indices(), vec![3, 5]);
        assert_eq!(hits.scan_order_indices(), vec![3, 5]);

        let none = TopHitSet::extract(&series, TopHitLimit::AtMost(0));
        assert!(none.is_empty());
        assert!(none.best().is_none());
    }

    #[test]
    fn ties_break_by_scan_index() {
        let series = results(&[5.0, 1.0, 5.0, 1.0, 5.0]);
        let hits = TopHitSet::extract(&series, TopHitLimit::AtMost(2));
        assert_eq!(hits.significance_indices(), vec![0, 2]);
    }

    #[test]
    fn limit_conversions() {
        assert_eq!(TopHitLimit::from(-1_i64), TopHitLimit::Unbounded);
        assert_eq!(TopHitLimit::from(20_i64), TopHitLimit::AtMost(20));
        assert_eq!(TopHitLimit::from(None), TopHitLimit::Unbounded);
        assert_eq!(TopHitLimit::from(Some(3)).max(), Some(3));
        assert_eq!(TopHitLimit::default(), TopHitLimit::Unbounded);
    }
}
