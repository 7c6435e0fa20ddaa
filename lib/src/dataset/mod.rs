//! Housing dataset loading.
//!
//! The dataset is a CSV file with at least the columns
//! `size, total_sqft, bath, balcony, site_location, price`; any other columns
//! are ignored. Rows without a usable `price` or `site_location` are dropped
//! while loading, everything else is kept verbatim and left to the
//! [`features`](crate::features) module to interpret.
//!
//! # Example
//!
//! ```no_run
//! use pune_estimator::dataset::HousingDataset;
//!
//! let dataset = HousingDataset::load("Pune house data.csv").unwrap();
//! println!("{} rows, {} locations", dataset.len(), dataset.locations().len());
//! ```

use crate::error::{EstimatorError, Result};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Columns the loader requires in the CSV header.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "size",
    "total_sqft",
    "bath",
    "balcony",
    "site_location",
    "price",
];

/// One row of the housing dataset as it appears in the source file.
///
/// `size` and `total_sqft` stay free text ("2 BHK", "1200-1500"); `bath` and
/// `balcony` are `None` when the cell is empty or not a number.
#[derive(Debug, Clone, PartialEq)]
pub struct HousingRecord {
    pub size: Option<String>,
    pub total_sqft: Option<String>,
    pub bath: Option<f64>,
    pub balcony: Option<f64>,
    pub site_location: String,
    /// Price in Lakhs.
    pub price: f64,
}

impl HousingRecord {
    /// Build a record from already-typed values (tests, synthetic data).
    pub fn new(
        size: impl Into<String>,
        total_sqft: impl Into<String>,
        bath: Option<f64>,
        balcony: Option<f64>,
        site_location: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            size: Some(size.into()),
            total_sqft: Some(total_sqft.into()),
            bath,
            balcony,
            site_location: site_location.into(),
            price,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    size: Option<String>,
    #[serde(default)]
    total_sqft: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    bath: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    balcony: Option<f64>,
    #[serde(default)]
    site_location: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    price: Option<f64>,
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|s| !s.trim().is_empty())
}

impl RawRow {
    fn into_record(self) -> Option<HousingRecord> {
        let price = self.price.filter(|p| p.is_finite())?;
        let site_location = non_blank(self.site_location)?;
        Some(HousingRecord {
            size: non_blank(self.size),
            total_sqft: non_blank(self.total_sqft),
            bath: self.bath.filter(|v| v.is_finite()),
            balcony: self.balcony.filter(|v| v.is_finite()),
            site_location,
            price,
        })
    }
}

/// The cleaned, immutable set of housing records.
#[derive(Debug, Clone, Default)]
pub struct HousingDataset {
    records: Vec<HousingRecord>,
    dropped: usize,
}

impl HousingDataset {
    /// Load and clean the dataset at `path`.
    ///
    /// # Errors
    /// Fails if the file cannot be opened, is not valid CSV, or lacks one of
    /// [`REQUIRED_COLUMNS`]. Malformed cells never fail the load.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dataset = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            rows = dataset.len(),
            dropped = dataset.dropped,
            "loaded housing dataset"
        );
        Ok(dataset)
    }

    /// Read and clean CSV data from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(EstimatorError::MissingColumn(column.to_string()));
            }
        }

        let mut records = Vec::new();
        let mut dropped = 0;
        for (line, row) in rdr.deserialize::<RawRow>().enumerate() {
            match row?.into_record() {
                Some(record) => records.push(record),
                None => {
                    debug!(row = line + 1, "dropping row without price or site_location");
                    dropped += 1;
                }
            }
        }

        Ok(Self { records, dropped })
    }

    /// Wrap records that were built in memory. No cleaning is applied.
    pub fn from_records(records: Vec<HousingRecord>) -> Self {
        Self {
            records,
            dropped: 0,
        }
    }

    pub fn records(&self) -> &[HousingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of rows discarded for a missing price or location.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Sorted, de-duplicated site locations.
    pub fn locations(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.site_location.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Actual prices of every record in `location`.
    pub fn prices_in(&self, location: &str) -> Vec<f64> {
        self.records
            .iter()
            .filter(|r| r.site_location == location)
            .map(|r| r.price)
            .collect()
    }

    /// Target vector (prices) in record order.
    pub fn targets(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.price).collect()
    }
}
