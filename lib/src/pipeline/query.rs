//! Price queries and their validation.

use crate::error::{EstimatorError, Result};
use crate::features::FeatureVector;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::ops::RangeInclusive;

/// Accepted built-up area, in square feet.
pub const TOTAL_SQFT_RANGE: RangeInclusive<f64> = 300.0..=10000.0;
pub const BHK_RANGE: RangeInclusive<u32> = 1..=10;
pub const BATH_RANGE: RangeInclusive<u32> = 1..=5;
pub const BALCONY_RANGE: RangeInclusive<u32> = 0..=5;

/// The numeric description of a house, independent of where it is.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HouseSpec {
    pub total_sqft: f64,
    pub bhk: u32,
    pub bath: u32,
    pub balcony: u32,
}

fn check<T>(field: &'static str, value: T, range: &RangeInclusive<T>) -> Result<()>
where
    T: PartialOrd + Display,
{
    if range.contains(&value) {
        return Ok(());
    }
    Err(EstimatorError::InvalidQuery {
        field,
        value: value.to_string(),
        reason: format!("must be within [{}, {}]", range.start(), range.end()),
    })
}

impl HouseSpec {
    pub fn new(total_sqft: f64, bhk: u32, bath: u32, balcony: u32) -> Self {
        Self {
            total_sqft,
            bhk,
            bath,
            balcony,
        }
    }

    /// # Errors
    /// [`EstimatorError::InvalidQuery`] naming the first out-of-range field.
    pub fn validate(&self) -> Result<()> {
        check("total_sqft", self.total_sqft, &TOTAL_SQFT_RANGE)?;
        check("bhk", self.bhk, &BHK_RANGE)?;
        check("bath", self.bath, &BATH_RANGE)?;
        check("balcony", self.balcony, &BALCONY_RANGE)
    }

    /// Features of this house placed at `site_location`.
    pub fn at(&self, site_location: &str) -> FeatureVector {
        FeatureVector {
            total_sqft: Some(self.total_sqft),
            bhk: Some(f64::from(self.bhk)),
            bath: Some(f64::from(self.bath)),
            balcony: Some(f64::from(self.balcony)),
            site_location: site_location.trim().to_string(),
        }
    }
}

/// A single-location price query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceQuery {
    pub spec: HouseSpec,
    pub site_location: String,
}

impl PriceQuery {
    pub fn new(spec: HouseSpec, site_location: impl Into<String>) -> Self {
        Self {
            spec,
            site_location: site_location.into(),
        }
    }

    /// Checks the numeric ranges and that a location was given. Locations
    /// unseen in training are valid.
    pub fn validate(&self) -> Result<()> {
        self.spec.validate()?;
        validate_location(&self.site_location)
    }

    pub fn features(&self) -> FeatureVector {
        self.spec.at(&self.site_location)
    }
}

pub(crate) fn validate_location(location: &str) -> Result<()> {
    if location.trim().is_empty() {
        return Err(EstimatorError::InvalidQuery {
            field: "site_location",
            value: String::new(),
            reason: "must not be blank".to_string(),
        });
    }
    Ok(())
}

/// One row of a location comparison.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LocationPrice {
    pub site_location: String,
    /// Predicted price in Lakhs.
    pub price: f64,
}
