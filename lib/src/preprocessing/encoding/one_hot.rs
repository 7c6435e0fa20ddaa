//! One-hot encoding for a single categorical column.

use crate::preprocessing::encoding::{Category, HandleUnknown, Vocabulary};
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use ndarray::{Array2, ArrayViewMut1};
use serde::{Deserialize, Serialize};

/// One-hot encoder for string categories.
///
/// Learns the vocabulary of a column and maps each value to an indicator
/// vector with one position per known category.
///
/// # Example
/// ```
/// use pune_estimator::preprocessing::{
///     FittedTransformer, HandleUnknown, OneHotEncoder, Transformer,
/// };
///
/// let train = vec!["Baner".to_string(), "Aundh".to_string()];
/// let encoder = OneHotEncoder::new().with_handle_unknown(HandleUnknown::Ignore);
/// let fitted = encoder.fit(&train).unwrap();
///
/// let encoded = fitted.transform(&["Aundh".to_string(), "Wakad".to_string()]).unwrap();
/// assert_eq!(encoded.row(0).to_vec(), vec![1.0, 0.0]);
/// assert_eq!(encoded.row(1).to_vec(), vec![0.0, 0.0]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct OneHotEncoder {
    handle_unknown: HandleUnknown,
}

impl OneHotEncoder {
    /// Create a new OneHotEncoder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the strategy for handling unknown categories.
    pub fn with_handle_unknown(mut self, strategy: HandleUnknown) -> Self {
        self.handle_unknown = strategy;
        self
    }
}

/// Serializable parameters for a fitted OneHotEncoder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OneHotEncoderParams {
    /// Categories in output-column order.
    pub categories: Vec<String>,
    pub handle_unknown: HandleUnknown,
}

/// Fitted OneHotEncoder ready for inference.
#[derive(Clone, Debug)]
pub struct FittedOneHotEncoder {
    vocabulary: Vocabulary,
    handle_unknown: HandleUnknown,
}

impl FittedOneHotEncoder {
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Number of output (indicator) columns.
    pub fn n_features_out(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn handle_unknown(&self) -> HandleUnknown {
        self.handle_unknown
    }

    /// Write the indicator vector of `value` into `out`, which must be zeroed
    /// and `n_features_out()` long.
    pub fn encode_into(
        &self,
        value: &str,
        mut out: ArrayViewMut1<f64>,
    ) -> Result<(), PreprocessingError> {
        if out.len() != self.n_features_out() {
            return Err(PreprocessingError::InvalidShape {
                expected: format!("({},)", self.n_features_out()),
                got: format!("({},)", out.len()),
            });
        }
        match self.vocabulary.lookup(value) {
            Category::Known(idx) => out[idx] = 1.0,
            Category::Unknown => {
                if self.handle_unknown == HandleUnknown::Error {
                    return Err(PreprocessingError::UnknownCategory(value.to_string()));
                }
            }
        }
        Ok(())
    }
}

impl Transformer for OneHotEncoder {
    type Input = [String];
    type Output = Array2<f64>;
    type Params = OneHotEncoderParams;
    type Fitted = FittedOneHotEncoder;

    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, PreprocessingError> {
        if data.is_empty() {
            return Err(PreprocessingError::EmptyData(
                "Cannot fit OneHotEncoder on empty data".to_string(),
            ));
        }

        Ok(FittedOneHotEncoder {
            vocabulary: Vocabulary::from_observed(data),
            handle_unknown: self.handle_unknown,
        })
    }
}

impl FittedTransformer for FittedOneHotEncoder {
    type Input = [String];
    type Output = Array2<f64>;
    type Params = OneHotEncoderParams;

    fn transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError> {
        let mut result = Array2::zeros((data.len(), self.n_features_out()));
        for (value, row) in data.iter().zip(result.rows_mut()) {
            self.encode_into(value, row)?;
        }
        Ok(result)
    }

    fn extract_params(&self) -> Self::Params {
        OneHotEncoderParams {
            categories: self.vocabulary.categories().to_vec(),
            handle_unknown: self.handle_unknown,
        }
    }

    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError> {
        if params.categories.windows(2).any(|w| w[0] >= w[1]) {
            return Err(PreprocessingError::InvalidParameter(
                "one-hot categories must be sorted and unique".to_string(),
            ));
        }
        Ok(Self {
            vocabulary: Vocabulary::from_sorted(params.categories),
            handle_unknown: params.handle_unknown,
        })
    }

    fn n_features_in(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_one_hot_known_categories() {
        let data = strings(&["Kothrud", "Aundh", "Baner"]);
        let fitted = OneHotEncoder::new().fit(&data).unwrap();

        assert_eq!(fitted.n_features_out(), 3);
        assert_eq!(fitted.vocabulary().categories(), &["Aundh", "Baner", "Kothrud"]);

        let encoded = fitted.transform(&data).unwrap();
        assert_eq!(encoded.row(0).to_vec(), vec![0.0, 0.0, 1.0]);
        assert_eq!(encoded.row(1).to_vec(), vec![1.0, 0.0, 0.0]);
        assert_eq!(encoded.row(2).to_vec(), vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_one_hot_unknown_error() {
        let fitted = OneHotEncoder::new().fit(&strings(&["Aundh"])).unwrap();
        let result = fitted.transform(&strings(&["Wakad"]));
        assert!(matches!(result, Err(PreprocessingError::UnknownCategory(ref c)) if c == "Wakad"));
    }

    #[test]
    fn test_one_hot_unknown_ignore_is_all_zero() {
        let fitted = OneHotEncoder::new()
            .with_handle_unknown(HandleUnknown::Ignore)
            .fit(&strings(&["Aundh", "Baner"]))
            .unwrap();
        let encoded = fitted.transform(&strings(&["Wakad"])).unwrap();
        assert_eq!(encoded.row(0).to_vec(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_one_hot_empty_fit_rejected() {
        let result = OneHotEncoder::new().fit(&[]);
        assert!(matches!(result, Err(PreprocessingError::EmptyData(_))));
    }

    #[test]
    fn test_one_hot_empty_transform() {
        let fitted = OneHotEncoder::new().fit(&strings(&["Aundh", "Baner"])).unwrap();
        let encoded = fitted.transform(&[]).unwrap();
        assert_eq!(encoded.dim(), (0, 2));
    }

    #[test]
    fn test_encode_into_wrong_length() {
        let fitted = OneHotEncoder::new().fit(&strings(&["Aundh", "Baner"])).unwrap();
        let mut out = ndarray::Array1::zeros(3);
        let result = fitted.encode_into("Aundh", out.view_mut());
        assert!(matches!(result, Err(PreprocessingError::InvalidShape { .. })));
    }

    #[test]
    fn test_params_round_trip() {
        let fitted = OneHotEncoder::new()
            .with_handle_unknown(HandleUnknown::Ignore)
            .fit(&strings(&["Kothrud", "Aundh"]))
            .unwrap();
        let params = fitted.extract_params();
        assert_eq!(params.categories, strings(&["Aundh", "Kothrud"]));

        let restored = FittedOneHotEncoder::from_params(params).unwrap();
        assert_eq!(restored.handle_unknown(), HandleUnknown::Ignore);
        assert_eq!(restored.vocabulary().lookup("Kothrud"), Category::Known(1));
    }

    #[test]
    fn test_from_params_rejects_unsorted() {
        let params = OneHotEncoderParams {
            categories: strings(&["Kothrud", "Aundh"]),
            handle_unknown: HandleUnknown::Error,
        };
        assert!(FittedOneHotEncoder::from_params(params).is_err());
    }
}
