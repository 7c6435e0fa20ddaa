//! Linear regression with compile-time state tracking.
//!
//! - [`LinearRegression`] = `LinearModel<Unfitted>`: fit options only.
//! - `LinearModel<Fitted>`: coefficients and intercept, inference only.
//!
//! Fitting is ordinary least squares with an intercept: the design is
//! centred, the slope is solved through the normal equations, and the
//! intercept is recovered from the means (`b = ȳ − x̄·w`).

use crate::model::solver::least_squares;
pub use crate::model::{Fitted, InferenceModel, ModelError, Unfitted};
use ndarray::{Array1, Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Learned parameters of a linear model: weights and bias.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinearParams {
    pub weights: Array1<f64>,
    pub bias: f64,
}

/// Serializable representation of [`LinearParams`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SerializableLinearParams {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl From<&LinearParams> for SerializableLinearParams {
    fn from(params: &LinearParams) -> Self {
        Self {
            weights: params.weights.to_vec(),
            bias: params.bias,
        }
    }
}

impl From<SerializableLinearParams> for LinearParams {
    fn from(value: SerializableLinearParams) -> Self {
        Self {
            weights: Array1::from(value.weights),
            bias: value.bias,
        }
    }
}

/// A linear model with its fit state encoded in the type.
///
/// `predict` exists only on `LinearModel<Fitted>`.
#[derive(Clone, Debug)]
pub struct LinearModel<S> {
    params: LinearParams,
    fit_intercept: bool,
    _state: PhantomData<S>,
}

/// Alias for an unfitted linear regression model.
pub type LinearRegression = LinearModel<Unfitted>;

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearRegression {
    /// Ordinary least squares with an intercept.
    pub fn new() -> Self {
        Self {
            params: LinearParams::default(),
            fit_intercept: true,
            _state: PhantomData,
        }
    }

    /// Whether to fit an intercept (default `true`). Without one the model
    /// passes through the origin.
    pub fn with_fit_intercept(mut self, fit_intercept: bool) -> Self {
        self.fit_intercept = fit_intercept;
        self
    }

    /// Fit on design matrix `x` (`n × k`) and targets `y` (`n`).
    ///
    /// # Errors
    /// - [`ModelError::EmptyData`] when `x` has no rows
    /// - [`ModelError::ShapeMismatch`] when `y.len() != n`
    /// - [`ModelError::NonFinite`] when `x` or `y` holds NaN or infinities
    /// - [`ModelError::Singular`] when the solver gives up
    pub fn fit(&self, x: &Array2<f64>, y: &Array1<f64>) -> Result<LinearModel<Fitted>, ModelError> {
        let (rows, cols) = x.dim();
        if rows == 0 {
            return Err(ModelError::EmptyData);
        }
        if y.len() != rows {
            return Err(ModelError::ShapeMismatch(format!(
                "x has {} rows but y has {} values",
                rows,
                y.len()
            )));
        }
        if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
            return Err(ModelError::NonFinite);
        }

        let (x_mean, y_mean) = if self.fit_intercept {
            let x_mean = x
                .mean_axis(Axis(0))
                .unwrap_or_else(|| Array1::zeros(cols));
            let y_mean = y.mean().unwrap_or(0.0);
            (x_mean, y_mean)
        } else {
            (Array1::zeros(cols), 0.0)
        };

        let x_centered = x - &x_mean;
        let y_centered = y - y_mean;

        let weights = least_squares(&x_centered, &y_centered).ok_or(ModelError::Singular(cols))?;
        let bias = y_mean - x_mean.dot(&weights);

        Ok(LinearModel::<Fitted>::new(LinearParams { weights, bias }))
    }
}

impl LinearModel<Fitted> {
    /// Wrap already-trained parameters.
    pub fn new(params: LinearParams) -> Self {
        Self {
            params,
            fit_intercept: true,
            _state: PhantomData,
        }
    }

    pub fn params(&self) -> &LinearParams {
        &self.params
    }

    pub fn coefficients(&self) -> ArrayView1<f64> {
        self.params.weights.view()
    }

    pub fn intercept(&self) -> f64 {
        self.params.bias
    }

    pub fn n_features(&self) -> usize {
        self.params.weights.len()
    }

    fn check_width(&self, got: usize) -> Result<(), ModelError> {
        if got != self.n_features() {
            return Err(ModelError::ShapeMismatch(format!(
                "model expects {} features, got {}",
                self.n_features(),
                got
            )));
        }
        Ok(())
    }

    fn dot(&self, row: impl IntoIterator<Item = f64>) -> f64 {
        self.params
            .weights
            .iter()
            .zip(row)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.params.bias
    }
}

/// `y = w·x + b`, one sample as a slice or many as matrix rows. Batch rows
/// go through the same arithmetic as single samples, so both agree bit for
/// bit.
impl InferenceModel for LinearModel<Fitted> {
    type InputSingle = [f64];
    type OutputSingle = f64;
    type InputBatch = Array2<f64>;
    type OutputBatch = Array1<f64>;
    type ParamsRepr = SerializableLinearParams;

    fn predict(&self, input: &[f64]) -> Result<f64, ModelError> {
        self.check_width(input.len())?;
        Ok(self.dot(input.iter().copied()))
    }

    fn predict_batch(&self, input: &Array2<f64>) -> Result<Array1<f64>, ModelError> {
        self.check_width(input.ncols())?;
        Ok(input
            .rows()
            .into_iter()
            .map(|row| self.dot(row.iter().copied()))
            .collect())
    }

    fn extract_params(&self) -> Self::ParamsRepr {
        (&self.params).into()
    }

    fn from_params(params: Self::ParamsRepr) -> Result<Self, ModelError> {
        if !params.bias.is_finite() || params.weights.iter().any(|w| !w.is_finite()) {
            return Err(ModelError::NonFinite);
        }
        Ok(Self::new(params.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_linear_regression_with_bias() {
        // y = 2x + 1
        let x = array![[0.0], [1.0], [2.0], [3.0]];
        let y = array![1.0, 3.0, 5.0, 7.0];

        let fitted = LinearRegression::new().fit(&x, &y).unwrap();
        assert!((fitted.coefficients()[0] - 2.0).abs() < 1e-9);
        assert!((fitted.intercept() - 1.0).abs() < 1e-9);
        assert!((fitted.predict(&[2.5]).unwrap() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_regression_minimises_residuals() {
        // Noisy line: OLS slope = cov(x, y) / var(x)
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = array![2.0, 2.5, 4.5, 5.0];
        let fitted = LinearRegression::new().fit(&x, &y).unwrap();
        // x̄ = 2.5, ȳ = 3.5, Σ(dx·dy) = 5.5, Σdx² = 5
        assert!((fitted.coefficients()[0] - 1.1).abs() < 1e-9);
        assert!((fitted.intercept() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_without_intercept() {
        let x = array![[1.0], [2.0], [3.0]];
        let y = array![2.0, 4.0, 6.0];
        let fitted = LinearRegression::new()
            .with_fit_intercept(false)
            .fit(&x, &y)
            .unwrap();
        assert!((fitted.coefficients()[0] - 2.0).abs() < 1e-9);
        assert_eq!(fitted.intercept(), 0.0);
    }

    #[test]
    fn test_collinear_one_hot_with_intercept() {
        // Two locations, every row in exactly one of them.
        let x = array![[1.0, 0.0], [0.0, 1.0], [1.0, 0.0], [0.0, 1.0]];
        let y = array![1.0, 3.0, 1.0, 3.0];
        let fitted = LinearRegression::new().fit(&x, &y).unwrap();

        assert!(fitted.coefficients().iter().all(|w| w.is_finite()));
        assert!((fitted.predict(&[1.0, 0.0]).unwrap() - 1.0).abs() < 1e-6);
        assert!((fitted.predict(&[0.0, 1.0]).unwrap() - 3.0).abs() < 1e-6);
        // Neither location: the minimum-norm solution lands on the mean.
        assert!((fitted.predict(&[0.0, 0.0]).unwrap() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_constant_column_gets_zero_weight() {
        let x = array![[1.0, 5.0], [2.0, 5.0], [3.0, 5.0]];
        let y = array![3.0, 5.0, 7.0];
        let fitted = LinearRegression::new().fit(&x, &y).unwrap();
        assert!((fitted.coefficients()[0] - 2.0).abs() < 1e-6);
        assert!(fitted.coefficients()[1].abs() < 1e-6);
        assert!((fitted.predict(&[4.0, 5.0]).unwrap() - 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_no_features_predicts_mean() {
        let x = Array2::<f64>::zeros((3, 0));
        let y = array![1.0, 2.0, 6.0];
        let fitted = LinearRegression::new().fit(&x, &y).unwrap();
        assert!((fitted.predict(&[]).unwrap() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_fit_rejects_bad_input() {
        let empty = Array2::<f64>::zeros((0, 2));
        assert!(matches!(
            LinearRegression::new().fit(&empty, &Array1::zeros(0)),
            Err(ModelError::EmptyData)
        ));

        let x = array![[1.0], [2.0]];
        assert!(matches!(
            LinearRegression::new().fit(&x, &array![1.0]),
            Err(ModelError::ShapeMismatch(_))
        ));

        let y = array![1.0, f64::NAN];
        assert!(matches!(
            LinearRegression::new().fit(&x, &y),
            Err(ModelError::NonFinite)
        ));
    }

    #[test]
    fn test_predict_width_mismatch() {
        let fitted = LinearModel::<Fitted>::new(LinearParams {
            weights: array![1.0, 2.0],
            bias: 0.5,
        });
        assert!(matches!(
            fitted.predict(&[1.0]),
            Err(ModelError::ShapeMismatch(_))
        ));
        assert!(fitted.predict_batch(&array![[1.0, 2.0, 3.0]]).is_err());
    }

    #[test]
    fn test_batch_matches_single() {
        let fitted = LinearModel::<Fitted>::new(LinearParams {
            weights: array![0.1, -0.3, 2.0],
            bias: 7.25,
        });
        let batch = array![[1.0, 2.0, 3.0], [0.5, 0.25, -1.0]];
        let predictions = fitted.predict_batch(&batch).unwrap();
        for (row, prediction) in batch.rows().into_iter().zip(predictions.iter()) {
            assert_eq!(fitted.predict(row.as_slice().unwrap()).unwrap(), *prediction);
        }
    }

    #[test]
    fn test_params_round_trip() {
        let fitted = LinearModel::<Fitted>::new(LinearParams {
            weights: array![1.5, -2.0],
            bias: 3.0,
        });
        let restored = LinearModel::<Fitted>::from_params(fitted.extract_params()).unwrap();
        assert_eq!(restored.params(), fitted.params());
    }

    #[test]
    fn test_from_params_rejects_non_finite() {
        let params = SerializableLinearParams {
            weights: vec![1.0, f64::INFINITY],
            bias: 0.0,
        };
        assert!(LinearModel::<Fitted>::from_params(params).is_err());
    }
}
