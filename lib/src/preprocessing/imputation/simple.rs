//! Simple Imputer.
//!
//! Completes missing numeric values column by column with a statistic learned
//! at fit time: the median of the observed values, which is robust to the long
//! right tail of price and area columns.
//!
//! # Example
//! ```
//! use ndarray::array;
//! use pune_estimator::preprocessing::{FittedTransformer, SimpleImputer, Transformer};
//!
//! let data = array![[Some(1000.0)], [None], [Some(2000.0)], [None], [Some(3000.0)]];
//! let fitted = SimpleImputer::new().fit(&data).unwrap();
//! assert_eq!(fitted.statistics(), &[2000.0]);
//! let filled = fitted.transform(&data).unwrap();
//! assert_eq!(filled[[1, 0]], 2000.0);
//! ```

use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use ndarray::{Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Serializable parameters for a fitted SimpleImputer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimpleImputerParams {
    /// Training median of each feature.
    pub statistics: Vec<f64>,
}

/// Median imputer (unfitted).
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleImputer;

impl SimpleImputer {
    pub fn new() -> Self {
        Self
    }
}

/// Median of a non-empty slice. Sorts in place.
fn median(values: &mut [f64]) -> f64 {
    values.sort_by(f64::total_cmp);
    let n = values.len();
    if n % 2 == 0 {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    } else {
        values[n / 2]
    }
}

/// Median of the present values in one column, `None` when all are missing.
fn column_median(column: ArrayView1<Option<f64>>) -> Option<f64> {
    let mut present: Vec<f64> = column.iter().flatten().copied().collect();
    if present.is_empty() {
        return None;
    }
    Some(median(&mut present))
}

impl Transformer for SimpleImputer {
    type Input = Array2<Option<f64>>;
    type Output = Array2<f64>;
    type Params = SimpleImputerParams;
    type Fitted = FittedSimpleImputer;

    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, PreprocessingError> {
        if data.nrows() == 0 {
            return Err(PreprocessingError::EmptyData(
                "Cannot fit SimpleImputer on empty data".to_string(),
            ));
        }

        let statistics = data
            .axis_iter(Axis(1))
            .enumerate()
            .map(|(col, column)| {
                column_median(column).unwrap_or_else(|| {
                    warn!(column = col, "no observed values in column, filling with 0.0");
                    0.0
                })
            })
            .collect();

        Ok(FittedSimpleImputer { statistics })
    }
}

/// Fitted SimpleImputer ready for inference.
#[derive(Clone, Debug)]
pub struct FittedSimpleImputer {
    statistics: Vec<f64>,
}

impl FittedSimpleImputer {
    /// The fill value of each feature.
    pub fn statistics(&self) -> &[f64] {
        &self.statistics
    }

    /// Fill a single row.
    pub fn fill_row(&self, row: &[Option<f64>]) -> Result<Vec<f64>, PreprocessingError> {
        if row.len() != self.statistics.len() {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: self.statistics.len(),
                got_features: row.len(),
            });
        }
        Ok(row
            .iter()
            .zip(&self.statistics)
            .map(|(value, fill)| value.unwrap_or(*fill))
            .collect())
    }
}

impl FittedTransformer for FittedSimpleImputer {
    type Input = Array2<Option<f64>>;
    type Output = Array2<f64>;
    type Params = SimpleImputerParams;

    fn transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError> {
        if data.ncols() != self.statistics.len() {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: self.statistics.len(),
                got_features: data.ncols(),
            });
        }

        Ok(Array2::from_shape_fn(data.dim(), |(row, col)| {
            data[[row, col]].unwrap_or(self.statistics[col])
        }))
    }

    fn extract_params(&self) -> Self::Params {
        SimpleImputerParams {
            statistics: self.statistics.clone(),
        }
    }

    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError> {
        if params.statistics.iter().any(|v| !v.is_finite()) {
            return Err(PreprocessingError::InvalidParameter(
                "imputer statistics must be finite".to_string(),
            ));
        }
        Ok(Self {
            statistics: params.statistics,
        })
    }

    fn n_features_in(&self) -> usize {
        self.statistics.len()
    }
}
