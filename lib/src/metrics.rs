//! Regression quality metrics.

use serde::Serialize;

/// Summary of how well predictions match the targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct RegressionMetrics {
    /// Mean squared error.
    pub mse: f64,
    /// Root mean squared error, in target units (Lakhs).
    pub rmse: f64,
    /// Mean absolute error.
    pub mae: f64,
    /// Coefficient of determination. 1 is perfect; may be negative.
    pub r2: f64,
    /// Number of samples scored.
    pub n_samples: usize,
}

impl RegressionMetrics {
    /// Score `y_pred` against `y_true`. Pairs beyond the shorter slice are
    /// ignored; empty input yields all-zero metrics.
    pub fn compute(y_true: &[f64], y_pred: &[f64]) -> Self {
        let n = y_true.len().min(y_pred.len());
        if n == 0 {
            return Self::default();
        }
        let (y_true, y_pred) = (&y_true[..n], &y_pred[..n]);

        let (sum_sq, sum_abs) = y_true
            .iter()
            .zip(y_pred)
            .fold((0.0, 0.0), |(sq, abs), (t, p)| {
                let residual = t - p;
                (sq + residual * residual, abs + residual.abs())
            });

        let mean_true = y_true.iter().sum::<f64>() / n as f64;
        let ss_tot: f64 = y_true.iter().map(|t| (t - mean_true).powi(2)).sum();
        let r2 = if ss_tot == 0.0 {
            if sum_sq == 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            1.0 - sum_sq / ss_tot
        };

        let mse = sum_sq / n as f64;
        Self {
            mse,
            rmse: mse.sqrt(),
            mae: sum_abs / n as f64,
            r2,
            n_samples: n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_prediction() {
        let y = [1.0, 2.0, 3.0];
        let m = RegressionMetrics::compute(&y, &y);
        assert_eq!(m.mse, 0.0);
        assert_eq!(m.mae, 0.0);
        assert_eq!(m.r2, 1.0);
        assert_eq!(m.n_samples, 3);
    }

    #[test]
    fn test_known_values() {
        let y_true = [1.0, 2.0, 3.0, 4.0];
        let y_pred = [1.5, 2.0, 2.0, 4.5];
        let m = RegressionMetrics::compute(&y_true, &y_pred);
        // residuals: -0.5, 0, 1, -0.5
        assert!((m.mse - 0.375).abs() < 1e-12);
        assert!((m.rmse - 0.375f64.sqrt()).abs() < 1e-12);
        assert!((m.mae - 0.5).abs() < 1e-12);
        // ss_tot = 5
        assert!((m.r2 - (1.0 - 1.5 / 5.0)).abs() < 1e-12);
    }

    #[test]
    fn test_mean_prediction_scores_zero_r2() {
        let y_true = [1.0, 2.0, 3.0];
        let m = RegressionMetrics::compute(&y_true, &[2.0, 2.0, 2.0]);
        assert!(m.r2.abs() < 1e-12);
    }

    #[test]
    fn test_empty() {
        assert_eq!(RegressionMetrics::compute(&[], &[]), RegressionMetrics::default());
    }
}
