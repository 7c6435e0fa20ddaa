//! Imputation transformers for handling missing values.
//!
//! | Transformer | Description |
//! |-------------|-------------|
//! | [`SimpleImputer`] | Impute with the column median |
//!
//! Missing entries are `None` in an `Array2<Option<f64>>`; the fitted imputer
//! produces a dense `Array2<f64>`.

pub mod simple;

pub use simple::{FittedSimpleImputer, SimpleImputer, SimpleImputerParams};
