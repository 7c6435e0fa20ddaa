//! Categorical feature encoding.
//!
//! Categories are plain strings (site locations). Fitting an encoder freezes
//! a [`Vocabulary`]: the sorted, de-duplicated categories seen in training.
//! Lookups resolve to [`Category::Known`] or the explicit
//! [`Category::Unknown`] sentinel, and [`HandleUnknown`] decides what the
//! encoder does with the latter.

mod one_hot;
mod vocabulary;

pub use one_hot::{FittedOneHotEncoder, OneHotEncoder, OneHotEncoderParams};
pub use vocabulary::{Category, Vocabulary};

/// Strategy for handling unknown categories during transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum HandleUnknown {
    /// Raise an error when an unknown category is encountered.
    #[default]
    Error,
    /// Encode unknown categories as all zeros.
    Ignore,
}
