//! Benchmark utilities for pune-estimator.
//!
//! - Deterministic synthetic housing data shaped like the Pune dataset
//! - Train/test splitting and CSV export
//! - Timing helpers for the metrics collector

pub mod data;
pub mod utils;

pub use data::{split, write_csv, SyntheticHousing};
pub use utils::{measure, time_fn, Timing};
