//! Runtime configuration.

use crate::preprocessing::HandleUnknown;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fixed relative filename of the housing dataset.
pub const DEFAULT_DATASET_PATH: &str = "Pune house data.csv";
/// Relative filename of the booking log.
pub const DEFAULT_BOOKING_LOG_PATH: &str = "bookings.csv";
/// Number of bins in the price-distribution histogram.
pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

/// Settings shared by the estimator and the booking log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub dataset_path: PathBuf,
    pub booking_log_path: PathBuf,
    pub histogram_bins: usize,
    /// What the location encoder does with locations unseen at fit time.
    pub handle_unknown: HandleUnknown,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            booking_log_path: PathBuf::from(DEFAULT_BOOKING_LOG_PATH),
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            handle_unknown: HandleUnknown::Ignore,
        }
    }
}

impl EstimatorConfig {
    pub fn with_dataset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset_path = path.into();
        self
    }

    pub fn with_booking_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.booking_log_path = path.into();
        self
    }

    pub fn with_histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = bins;
        self
    }

    pub fn with_handle_unknown(mut self, strategy: HandleUnknown) -> Self {
        self.handle_unknown = strategy;
        self
    }
}
