//! Data preprocessing transformers.
//!
//! Transformers follow the same type-state split as the models: an unfitted
//! [`Transformer`] carries hyperparameters, and [`Transformer::fit`] returns a
//! [`FittedTransformer`] holding the learned state. Fitted transformers
//! expose that state as a serde parameter struct so a trained pipeline can be
//! saved and restored.
//!
//! # Available Transformers
//!
//! ## Imputation
//! - [`SimpleImputer`]: fill missing values with the column median
//!
//! ## Encoding
//! - [`OneHotEncoder`]: one indicator column per category seen during fit
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use pune_estimator::preprocessing::{FittedTransformer, SimpleImputer, Transformer};
//!
//! let sqft = array![[Some(1000.0)], [None], [Some(2000.0)], [None], [Some(3000.0)]];
//! let fitted = SimpleImputer::default().fit(&sqft).unwrap();
//! assert_eq!(fitted.statistics(), &[2000.0]);
//!
//! let filled = fitted.transform(&sqft).unwrap();
//! assert_eq!(filled[[1, 0]], 2000.0);
//! ```

pub mod encoding;
pub mod error;
pub mod imputation;
pub mod traits;

pub use encoding::{
    Category, FittedOneHotEncoder, HandleUnknown, OneHotEncoder, OneHotEncoderParams, Vocabulary,
};
pub use error::PreprocessingError;
pub use imputation::{FittedSimpleImputer, SimpleImputer, SimpleImputerParams};
pub use traits::{FittedTransformer, Transformer};
