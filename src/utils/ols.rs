//! Ordinary Least Squares (OLS) regression on positional regressor columns.
//!
//! Used by the harmonic-fit periodograms (DCDFT, multi-harmonic DFT), which
//! regress magnitudes on cosine/sine columns at every trial frequency.

use crate::error::{PeriodogramError, Result};

/// Relative pivot size below which the normal equations count as singular.
const SINGULAR_PIVOT: f64 = 1e-12;

/// OLS regression coefficients and intercept.
#[derive(Debug, Clone)]
pub struct OLSResult {
    /// Regression coefficients, one per column, in column order.
    pub coefficients: Vec<f64>,
    /// Intercept term.
    pub intercept: f64,
}

impl OLSResult {
    /// Fitted values without the intercept: `X @ coefficients`.
    pub fn fitted_without_intercept(&self, columns: &[Vec<f64>]) -> Result<Vec<f64>> {
        if columns.len() != self.coefficients.len() {
            return Err(PeriodogramError::DimensionMismatch {
                expected: self.coefficients.len(),
                got: columns.len(),
            });
        }
        let n = columns.first().map(|c| c.len()).unwrap_or(0);

        let mut fitted = vec![0.0; n];
        for (coef, column) in self.coefficients.iter().zip(columns) {
            if column.len() != n {
                return Err(PeriodogramError::DimensionMismatch {
                    expected: n,
                    got: column.len(),
                });
            }
            for (f, x) in fitted.iter_mut().zip(column) {
                *f += coef * x;
            }
        }
        Ok(fitted)
    }

    /// Get the number of regressors.
    pub fn num_regressors(&self) -> usize {
        self.coefficients.len()
    }
}

/// Fit OLS regression: y = intercept + X @ coefficients
///
/// Uses Cholesky decomposition to solve the normal equations. A system whose
/// pivots collapse (collinear columns) is reported as a `ComputationError`.
pub fn ols_fit(y: &[f64], columns: &[Vec<f64>]) -> Result<OLSResult> {
    let n = y.len();

    if n == 0 {
        return Err(PeriodogramError::InsufficientData { needed: 1, got: 0 });
    }

    if columns.is_empty() {
        let intercept = y.iter().sum::<f64>() / n as f64;
        return Ok(OLSResult {
            coefficients: vec![],
            intercept,
        });
    }

    let k = columns.len();
    for column in columns {
        if column.len() != n {
            return Err(PeriodogramError::DimensionMismatch {
                expected: n,
                got: column.len(),
            });
        }
    }

    let num_params = k + 1;
    if n < num_params {
        return Err(PeriodogramError::InsufficientData {
            needed: num_params,
            got: n,
        });
    }

    // Design matrix columns are [1, x1, x2, ...]
    let mut xtx = vec![vec![0.0; num_params]; num_params];
    let mut xty = vec![0.0; num_params];

    for obs in 0..n {
        let y_obs = y[obs];

        xtx[0][0] += 1.0;
        for j in 0..k {
            let xj = columns[j][obs];
            xtx[0][j + 1] += xj;
            xtx[j + 1][0] += xj;
        }
        for i in 0..k {
            let xi = columns[i][obs];
            for j in 0..k {
                xtx[i + 1][j + 1] += xi * columns[j][obs];
            }
        }

        xty[0] += y_obs;
        for i in 0..k {
            xty[i + 1] += columns[i][obs] * y_obs;
        }
    }

    let beta = solve_symmetric(&xtx, &xty).ok_or_else(|| {
        PeriodogramError::ComputationError(
            "OLS regression failed: matrix not positive definite".into(),
        )
    })?;

    Ok(OLSResult {
        intercept: beta[0],
        coefficients: beta[1..].to_vec(),
    })
}

/// Solve symmetric positive definite system using Cholesky decomposition.
///
/// Solves A @ x = b where A is symmetric positive definite.
fn solve_symmetric(a: &[Vec<f64>], b: &[f64]) -> Option<Vec<f64>> {
    let n = b.len();
    if n == 0 || a.len() != n {
        return None;
    }

    // Cholesky decomposition A = L @ L'
    let mut l = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in 0..=i {
            let mut sum = a[i][j];
            for k in 0..j {
                sum -= l[i][k] * l[j][k];
            }

            if i == j {
                if !(sum > SINGULAR_PIVOT * a[i][i].abs()) {
                    return None;
                }
                l[i][j] = sum.sqrt();
            } else {
                l[i][j] = sum / l[j][j];
            }
        }
    }

    // Forward substitution: L @ y = b
    let mut y = vec![0.0; n];
    for i in 0..n {
        let mut sum = b[i];
        for j in 0..i {
            sum -= l[i][j] * y[j];
        }
        y[i] = sum / l[i][i];
    }

    // Backward substitution: L' @ x = y
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut sum = y[i];
        for j in (i + 1)..n {
            sum -= l[j][i] * x[j];
        }
        x[i] = sum / l[i][i];
    }

    Some(x)
}
