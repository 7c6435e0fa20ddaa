//! End-to-end tests over a small extract of the Pune housing data.

use pune_estimator::dataset::HousingDataset;
use pune_estimator::features::FeatureVector;
use pune_estimator::pipeline::{HouseSpec, PriceEstimator, PriceQuery, TrainedModel};
use pune_estimator::preprocessing::HandleUnknown;
use pune_estimator::EstimatorError;
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/pune_sample.csv")
}

fn trained() -> (HousingDataset, TrainedModel) {
    let dataset = HousingDataset::load(fixture()).unwrap();
    let model = PriceEstimator::new().fit(&dataset).unwrap();
    (dataset, model)
}

fn spec() -> HouseSpec {
    HouseSpec::new(1200.0, 2, 2, 1)
}

#[test]
fn test_load_drops_rows_without_price_or_location() {
    let dataset = HousingDataset::load(fixture()).unwrap();
    assert_eq!(dataset.len(), 20);
    assert_eq!(dataset.dropped(), 2);
    assert_eq!(dataset.locations().len(), 12);
}

#[test]
fn test_malformed_text_becomes_missing() {
    let dataset = HousingDataset::load(fixture()).unwrap();
    let features: Vec<FeatureVector> = dataset.records().iter().map(FeatureVector::derive).collect();

    // "1000-1285" is averaged, "34.46Sq. Meter" is not a number
    assert_eq!(features[12].total_sqft, Some(1142.5));
    assert_eq!(features[17].total_sqft, None);
    // no size text at all
    assert_eq!(features[16].bhk, None);
    assert_eq!(features[1].bhk, Some(4.0));
}

#[test]
fn test_prediction_is_deterministic() {
    let (dataset, model) = trained();
    let query = PriceQuery::new(spec(), "Baner");

    let first = model.predict(&query).unwrap();
    for _ in 0..3 {
        assert_eq!(first, model.predict(&query).unwrap());
    }
    let refit = PriceEstimator::new().fit(&dataset).unwrap();
    assert_eq!(first, refit.predict(&query).unwrap());
}

#[test]
fn test_unknown_location_is_intercept_plus_numeric() {
    let (_, model) = trained();
    let price = model
        .predict(&PriceQuery::new(spec(), "Kalyani Nagar"))
        .unwrap();

    let w = model.numeric_coefficients();
    let expected = model.intercept() + w[0] * 1200.0 + w[1] * 2.0 + w[2] * 2.0 + w[3] * 1.0;
    assert!(price.is_finite());
    assert!((price - expected).abs() < 1e-9);
}

#[test]
fn test_unknown_location_with_strict_encoder() {
    let dataset = HousingDataset::load(fixture()).unwrap();
    let model = PriceEstimator::new()
        .with_handle_unknown(HandleUnknown::Error)
        .fit(&dataset)
        .unwrap();
    let result = model.predict(&PriceQuery::new(spec(), "Kalyani Nagar"));
    assert!(matches!(result, Err(EstimatorError::Preprocessing(_))));
}

#[test]
fn test_comparison_equals_single_queries() {
    let (_, model) = trained();
    let locations = ["Aundh", "Baner", "Kalyani Nagar"];
    let compared = model.compare(&spec(), &locations).unwrap();

    assert_eq!(compared.len(), 3);
    for (row, location) in compared.iter().zip(locations) {
        assert_eq!(row.site_location, location);
        let single = model.predict(&PriceQuery::new(spec(), location)).unwrap();
        assert_eq!(row.price, single);
    }
}

#[test]
fn test_out_of_range_query_rejected() {
    let (_, model) = trained();
    let query = PriceQuery::new(HouseSpec::new(1200.0, 11, 2, 1), "Baner");
    assert!(matches!(
        model.predict(&query),
        Err(EstimatorError::InvalidQuery { field: "bhk", .. })
    ));
}

#[test]
fn test_saved_model_predicts_identically() {
    let (_, model) = trained();
    let path = std::env::temp_dir().join("pune_estimator_integration_model.bin");
    model.save_to_file(&path).unwrap();
    let loaded = TrainedModel::load_from_file(&path).unwrap();

    let query = PriceQuery::new(spec(), "Bibvewadi");
    assert_eq!(model.predict(&query).unwrap(), loaded.predict(&query).unwrap());
    std::fs::remove_file(path).ok();
}

#[test]
fn test_missing_dataset_is_fatal() {
    let result = HousingDataset::load("definitely/not/Pune house data.csv");
    assert!(matches!(result, Err(EstimatorError::Io(_))));
}
