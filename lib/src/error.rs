//! Crate-wide error type for the estimator pipeline.

use crate::model::ModelError;
use crate::preprocessing::PreprocessingError;
use thiserror::Error;

/// Result alias used across the estimator pipeline.
pub type Result<T> = std::result::Result<T, EstimatorError>;

/// Errors surfaced while loading the dataset, fitting the pipeline or
/// answering a price query.
#[derive(Debug, Error)]
pub enum EstimatorError {
    /// The dataset (or a persisted model) could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset is not well-formed CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The dataset has a header but one of the required columns is absent.
    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(String),

    /// No rows survived cleaning, so nothing can be fitted.
    #[error("Empty dataset: {0}")]
    EmptyDataset(String),

    /// A query field is outside the range accepted by the estimator.
    #[error("Invalid query: {field} = {value}, {reason}")]
    InvalidQuery {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Preprocessing(#[from] PreprocessingError),

    #[error(transparent)]
    Model(#[from] ModelError),

    /// Persisted model parameters could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<bincode::Error> for EstimatorError {
    fn from(err: bincode::Error) -> Self {
        EstimatorError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_column() {
        let err = EstimatorError::MissingColumn("price".to_string());
        assert_eq!(err.to_string(), "Dataset is missing required column 'price'");
    }

    #[test]
    fn test_error_display_invalid_query() {
        let err = EstimatorError::InvalidQuery {
            field: "bhk",
            value: "11".to_string(),
            reason: "must be within [1, 10]".to_string(),
        };
        assert!(err.to_string().contains("bhk = 11"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: EstimatorError = io_err.into();
        assert!(matches!(err, EstimatorError::Io(_)));
    }

    #[test]
    fn test_error_from_preprocessing_is_transparent() {
        let err: EstimatorError = PreprocessingError::EmptyData("no rows".to_string()).into();
        assert_eq!(err.to_string(), "Empty data: no rows");
    }

    #[test]
    fn test_error_from_bincode_error() {
        let bad_bytes: &[u8] = &[0xff, 0xff, 0xff, 0xff];
        let result: std::result::Result<String, bincode::Error> = bincode::deserialize(bad_bytes);
        let err: EstimatorError = result.unwrap_err().into();
        assert!(matches!(err, EstimatorError::Serialization(_)));
    }
}
