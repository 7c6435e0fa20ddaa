//! Regression models with compile-time fit state.
//!
//! A model starts as `Model<Unfitted>` and becomes `Model<Fitted>` exactly
//! once, through `fit`. Prediction exists only on the fitted type, so an
//! untrained model cannot be queried.

pub mod linear;
mod solver;
pub mod state;

pub use linear::{LinearModel, LinearParams, LinearRegression, SerializableLinearParams};
pub use state::{Fitted, Unfitted};

use thiserror::Error;

/// Errors raised while fitting or evaluating a model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Cannot fit on empty data")]
    EmptyData,

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Training data contains non-finite values")]
    NonFinite,

    /// The normal equations could not be solved even with ridge jitter.
    #[error("Least-squares system is singular ({0} features)")]
    Singular(usize),
}

/// Inference interface of a fitted model.
pub trait InferenceModel {
    type InputSingle: ?Sized;
    type OutputSingle;
    type InputBatch: ?Sized;
    type OutputBatch;
    /// Plain-data representation of the learned parameters.
    type ParamsRepr;

    fn predict(&self, input: &Self::InputSingle) -> Result<Self::OutputSingle, ModelError>;

    fn predict_batch(&self, input: &Self::InputBatch) -> Result<Self::OutputBatch, ModelError>;

    fn extract_params(&self) -> Self::ParamsRepr;

    fn from_params(params: Self::ParamsRepr) -> Result<Self, ModelError>
    where
        Self: Sized;
}
