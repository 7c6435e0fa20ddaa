//! Core traits for preprocessing transformers.
//!
//! - [`Transformer`]: the unfitted form; holds hyperparameters and learns from data.
//! - [`FittedTransformer`]: the fitted form; holds learned state and only transforms.

use crate::preprocessing::error::PreprocessingError;
use crate::serialization::SerializableParams;

/// Trait for unfitted transformers with hyperparameters.
///
/// # Example
/// ```ignore
/// use pune_estimator::preprocessing::{SimpleImputer, Transformer};
///
/// let fitted = SimpleImputer::new().fit(&numeric)?;
/// let filled = fitted.transform(&numeric)?;
/// ```
pub trait Transformer: Clone {
    /// Input data type for transformation.
    type Input: ?Sized;
    /// Output data type after transformation.
    type Output;
    /// Serializable representation of learned parameters.
    type Params: SerializableParams;
    /// The fitted transformer type ready for inference.
    type Fitted: FittedTransformer<Params = Self::Params, Input = Self::Input, Output = Self::Output>;

    /// Learn parameters (medians, vocabulary, ...) from the training data.
    ///
    /// # Errors
    /// Returns [`PreprocessingError`] if the data is empty or has an
    /// incompatible shape.
    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, PreprocessingError>;

    /// Fit the transformer and transform the same data in one step.
    fn fit_transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError> {
        let fitted = self.fit(data)?;
        fitted.transform(data)
    }
}

/// Trait for fitted transformers ready for inference.
///
/// `extract_params()` followed by `from_params()` reproduces an equivalent
/// transformer.
pub trait FittedTransformer: Clone {
    /// Input data type for transformation.
    type Input: ?Sized;
    /// Output data type after transformation.
    type Output;
    /// Serializable representation of learned parameters.
    type Params: SerializableParams;

    /// Transform data using the learned parameters.
    fn transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError>;

    /// Extract learned parameters as a serializable representation.
    fn extract_params(&self) -> Self::Params;

    /// Reconstruct a fitted transformer from parameters.
    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError>
    where
        Self: Sized;

    /// Number of input features seen during fit.
    fn n_features_in(&self) -> usize;
}
