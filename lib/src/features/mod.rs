//! Feature derivation: turns a [`HousingRecord`] into a [`FeatureVector`].
//!
//! Numeric features stay `Option<f64>` until the imputer fills them, so the
//! "missing" state is carried by the type rather than by NaN sentinels.

mod parse;

pub use parse::{extract_bhk, parse_total_sqft};

use crate::dataset::HousingRecord;

/// Names of the numeric feature columns, in design-matrix order.
pub const NUMERIC_FEATURES: [&str; 4] = ["total_sqft", "bhk", "bath", "balcony"];

/// Number of numeric feature columns.
pub const N_NUMERIC: usize = NUMERIC_FEATURES.len();

/// Model inputs derived from one housing record (or one query).
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub total_sqft: Option<f64>,
    pub bhk: Option<f64>,
    pub bath: Option<f64>,
    pub balcony: Option<f64>,
    pub site_location: String,
}

impl FeatureVector {
    /// Derive features from a raw record. Never fails.
    pub fn derive(record: &HousingRecord) -> Self {
        Self {
            total_sqft: record.total_sqft.as_deref().and_then(parse_total_sqft),
            bhk: record.size.as_deref().and_then(extract_bhk),
            bath: record.bath,
            balcony: record.balcony,
            site_location: record.site_location.clone(),
        }
    }

    /// Numeric features in [`NUMERIC_FEATURES`] order.
    pub fn numeric(&self) -> [Option<f64>; N_NUMERIC] {
        [self.total_sqft, self.bhk, self.bath, self.balcony]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_from_record() {
        let record = HousingRecord::new("3 BHK", "1200-1500", Some(2.0), None, "Aundh", 80.0);
        let features = FeatureVector::derive(&record);
        assert_eq!(features.total_sqft, Some(1350.0));
        assert_eq!(features.bhk, Some(3.0));
        assert_eq!(features.bath, Some(2.0));
        assert_eq!(features.balcony, None);
        assert_eq!(features.site_location, "Aundh");
    }

    #[test]
    fn test_derive_with_missing_text() {
        let mut record = HousingRecord::new("", "abc", None, Some(1.0), "Baner", 50.0);
        record.size = None;
        let features = FeatureVector::derive(&record);
        assert_eq!(features.numeric(), [None, None, None, Some(1.0)]);
    }
}
