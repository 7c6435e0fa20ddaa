//! # pune-estimator
//!
//! House-price estimation for Pune with strict separation between fitting
//! and inference.
//!
//! ## Core Design Principles
//!
//! - **Stateful Type Safety**: models and transformers carry their training
//!   state in the type system (`Unfitted` vs `Fitted`), so an untrained
//!   stage cannot be queried.
//! - **Fit Once, Query Many**: fitting produces an immutable
//!   [`TrainedModel`]; every query borrows it and nothing is recomputed.
//! - **Explicit Missing Values**: malformed cells become `None`, never NaN,
//!   and are filled by the training medians.
//!
//! ## Quick Start
//!
//! ```rust
//! use pune_estimator::dataset::{HousingDataset, HousingRecord};
//! use pune_estimator::pipeline::{HouseSpec, PriceEstimator, PriceQuery};
//!
//! let dataset = HousingDataset::from_records(vec![
//!     HousingRecord::new("2 BHK", "1000", Some(2.0), Some(1.0), "Aundh", 70.0),
//!     HousingRecord::new("3 BHK", "1500", Some(3.0), Some(2.0), "Aundh", 105.0),
//!     HousingRecord::new("2 BHK", "1200-1400", Some(2.0), None, "Baner", 85.0),
//!     HousingRecord::new("4 Bedroom", "2400", Some(4.0), Some(3.0), "Baner", 160.0),
//! ]);
//!
//! let model = PriceEstimator::new().fit(&dataset).unwrap();
//! let query = PriceQuery::new(HouseSpec::new(1300.0, 2, 2, 1), "Baner");
//! let price = model.predict(&query).unwrap();
//! println!("Estimated Price in Baner: ₹ {:.2} Lakhs", price);
//! ```
//!
//! ## Module Structure
//!
//! - `dataset` — CSV loading and row cleaning
//! - `features` — `bhk` and `total_sqft` extraction from free text
//! - `preprocessing` — median imputation and one-hot encoding
//! - `model` — ordinary least squares with stateful type parameters
//! - `pipeline` — the fitted end-to-end estimator and its queries
//! - `metrics`, `histogram` — reporting helpers
//! - `booking` — the bus timetable and booking log
//! - `serialization` — parameter persistence

/// Bus timetable, booking validation and the booking log.
pub mod booking;

pub mod config;

/// Data loading utilities and dataset abstractions.
pub mod dataset;

pub mod error;

/// Feature derivation from raw housing records.
pub mod features;

pub mod histogram;

pub mod metrics;

/// Regression models.
pub mod model;

/// The end-to-end estimator.
pub mod pipeline;

/// Data preprocessing transformers.
pub mod preprocessing;

/// Parameter persistence.
pub mod serialization;

pub use config::EstimatorConfig;
pub use error::{EstimatorError, Result};
pub use pipeline::{HouseSpec, LocationPrice, PriceEstimator, PriceQuery, TrainedModel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::HousingDataset;
    use crate::features::FeatureVector;

    const CSV: &str = "\
area_type,availability,size,society,total_sqft,bath,balcony,price,site_location
Super built-up  Area,19-Dec,2 BHK,Coomee ,1056,2,1,39.07,Alandi Road
Plot  Area,Ready To Move,4 Bedroom,Theanmp,2600,5,3,120,Ambegaon Budruk
Built-up  Area,Ready To Move,3 BHK,,1440,2,3,62,Anandnagar
Super built-up  Area,Ready To Move,3 BHK,Soiewre,1521,3,1,95,Aundh
Super built-up  Area,Ready To Move,2 BHK,,1200,2,1,51,Aundh Road
Super built-up  Area,Ready To Move,2 BHK,DuenaTa,1170,2,1,38,Balaji Nagar
Super built-up  Area,18-May,4 BHK,Jaades ,2732,4,,204,Baner
Super built-up  Area,Ready To Move,4 BHK,Brway G,3300,4,,600,Baner Road
Super built-up  Area,Ready To Move,3 BHK,,1310,3,1,63.25,Bhandarkar Road
Plot  Area,Ready To Move,1 BHK,,1000-1285,1,0,60,Bhavani Peth
Super built-up  Area,20-Dec,2 BHK,Brkiea ,1250,2,2,40,Bibvewadi
Built-up  Area,Ready To Move,2 BHK,,1200,2,1,70,Bopodi
";

    #[test]
    fn test_end_to_end_from_csv() {
        let dataset = HousingDataset::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 12);

        let model = PriceEstimator::from_config(&EstimatorConfig::default())
            .fit(&dataset)
            .unwrap();
        assert_eq!(model.locations().len(), 12);

        let query = PriceQuery::new(HouseSpec::new(1200.0, 2, 2, 1), "Bopodi");
        let price = model.predict(&query).unwrap();
        assert!(price.is_finite());
        assert_eq!(price, model.predict(&query).unwrap());
    }

    #[test]
    fn test_balcony_median_fills_gaps() {
        let dataset = HousingDataset::from_reader(CSV.as_bytes()).unwrap();
        let model = PriceEstimator::new().fit(&dataset).unwrap();
        // observed balconies: 1,3,3,1,1,1,1,0,2,1 -> median 1
        assert_eq!(model.medians()[3], 1.0);

        let baner = FeatureVector::derive(&dataset.records()[6]);
        assert_eq!(baner.balcony, None);
        assert!(model.predict_features(&baner).unwrap().is_finite());
    }
}
