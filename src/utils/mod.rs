//! Numeric helpers shared by the periodogram methods.

pub mod ols;
pub mod stats;

pub use ols::{ols_fit, OLSResult};
pub use stats::{
    finite_or_nan, mean, median, median_positive_interval, population_variance, variance,
};
