//! Statistical utility functions.

/// Calculate the mean of a slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Calculate the population variance of a slice (n denominator).
///
/// # Example
/// ```
/// use anofox_periodogram::utils::population_variance;
///
/// let v = population_variance(&[1.0, 2.0, 3.0, 4.0]);
/// assert!((v - 1.25).abs() < 1e-12);
/// ```
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|x| (x - m).powi(2)).sum();
    sum_sq / values.len() as f64
}

/// Calculate the variance of a slice (sample variance with n-1 denominator).
pub fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|x| (x - m).powi(2)).sum();
    sum_sq / (values.len() - 1) as f64
}

/// Calculate the median of a slice.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    if n.is_multiple_of(2) {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Median of the strictly positive gaps between consecutive sorted times.
///
/// Repeated times are ignored. Returns `0.0` when fewer than two distinct
/// times are available.
pub fn median_positive_interval(times: &[f64]) -> f64 {
    if times.len() < 2 {
        return 0.0;
    }
    let mut sorted = times.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let intervals: Vec<f64> = sorted
        .windows(2)
        .map(|w| w[1] - w[0])
        .filter(|d| *d > 0.0)
        .collect();

    if intervals.is_empty() {
        0.0
    } else {
        median(&intervals)
    }
}

/// Replace `±inf` by `NaN`, leaving every other value untouched.
#[inline]
pub fn finite_or_nan(value: f64) -> f64 {
    if value.is_infinite() {
        f64::NAN
    } else {
        value
    }
}
