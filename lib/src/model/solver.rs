//! Least-squares solver over the normal equations.
//!
//! Columns are scaled to unit norm before forming `XᵀX`, so the Cholesky
//! pivot test compares every pivot against a diagonal of 1 regardless of
//! the feature's units (square feet next to 0/1 location indicators).
//! Collinear designs, such as a full one-hot block next to an intercept,
//! fail the pivot test and are retried with a small ridge term. The ridge
//! acts on the scaled columns, so among the exact solutions it selects the
//! one of smallest norm in scaled coordinates, not in the original units.
//! Callers that need the minimum-norm solution project it themselves.

use ndarray::{Array1, Array2, Axis};
use tracing::debug;

/// Pivots at or below this fraction of their diagonal entry are treated as zero.
const PIVOT_TOLERANCE: f64 = 1e-10;

/// Ridge terms tried in order when the plain system is singular.
const RIDGE_SCHEDULE: [f64; 3] = [1e-8, 1e-6, 1e-4];

/// Solve `min ‖Xw − y‖²`. Returns `None` if no ridge term in the schedule
/// makes the system positive definite.
pub(crate) fn least_squares(x: &Array2<f64>, y: &Array1<f64>) -> Option<Array1<f64>> {
    if x.ncols() == 0 {
        return Some(Array1::zeros(0));
    }

    let scales: Array1<f64> = x
        .axis_iter(Axis(1))
        .map(|column| {
            let norm = column.dot(&column).sqrt();
            if norm > 0.0 {
                norm
            } else {
                1.0
            }
        })
        .collect();

    let scaled = x / &scales;
    let gram = scaled.t().dot(&scaled);
    let rhs = scaled.t().dot(y);

    let solution = cholesky_solve(&gram, &rhs, 0.0).or_else(|| {
        RIDGE_SCHEDULE.iter().find_map(|&ridge| {
            debug!(ridge, features = x.ncols(), "normal equations singular, adding ridge");
            cholesky_solve(&gram, &rhs, ridge)
        })
    })?;

    Some(solution / &scales)
}

/// Solve `(A + ridge·I) x = b` for symmetric `A` via Cholesky factorisation.
fn cholesky_solve(a: &Array2<f64>, b: &Array1<f64>, ridge: f64) -> Option<Array1<f64>> {
    let n = a.nrows();
    let mut l = Array2::<f64>::zeros((n, n));

    for i in 0..n {
        for j in 0..=i {
            let mut sum = a[[i, j]];
            for k in 0..j {
                sum -= l[[i, k]] * l[[j, k]];
            }

            if i == j {
                let diagonal = a[[i, i]] + ridge;
                let pivot = sum + ridge;
                if pivot.is_nan() || pivot <= PIVOT_TOLERANCE * diagonal {
                    return None;
                }
                l[[i, i]] = pivot.sqrt();
            } else {
                l[[i, j]] = sum / l[[j, j]];
            }
        }
    }

    // L z = b
    let mut z = Array1::<f64>::zeros(n);
    for i in 0..n {
        let mut sum = b[i];
        for k in 0..i {
            sum -= l[[i, k]] * z[k];
        }
        z[i] = sum / l[[i, i]];
    }

    // Lᵀ x = z
    let mut x = Array1::<f64>::zeros(n);
    for i in (0..n).rev() {
        let mut sum = z[i];
        for k in (i + 1)..n {
            sum -= l[[k, i]] * x[k];
        }
        x[i] = sum / l[[i, i]];
    }

    Some(x)
}
