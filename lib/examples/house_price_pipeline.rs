//! House Price Pipeline Example
//!
//! Walks through the full estimator on the bundled Pune sample:
//! - Loading and cleaning the CSV
//! - Feature derivation (`bhk` from `size`, ranges in `total_sqft`)
//! - Median imputation and one-hot location encoding
//! - Least-squares fit, in-sample metrics
//! - Saving and reloading the trained model
//! - Single predictions and a location comparison
//!
//! Run with: cargo run --example house_price_pipeline [path/to/data.csv]

use pune_estimator::{
    dataset::HousingDataset,
    features::NUMERIC_FEATURES,
    pipeline::{HouseSpec, PriceEstimator, PriceQuery, TrainedModel},
};
use std::error::Error;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pune_estimator=info".into()),
        )
        .init();

    println!("=== Pune House Price Pipeline ===\n");

    // 1. Load the dataset
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/pune_sample.csv")
        });
    let dataset = HousingDataset::load(&path)?;
    println!(
        "Loaded {} rows ({} dropped) across {} locations",
        dataset.len(),
        dataset.dropped(),
        dataset.locations().len()
    );

    // 2. Fit imputer, encoder and regressor in one go
    println!("\nFitting estimator...");
    let model = PriceEstimator::new().fit(&dataset)?;
    let metrics = model.score(&dataset)?;
    println!("  R²:   {:.4}", metrics.r2);
    println!("  RMSE: {:.2} Lakhs", metrics.rmse);
    println!("  MAE:  {:.2} Lakhs", metrics.mae);

    println!("\nTraining medians:");
    for (name, median) in NUMERIC_FEATURES.iter().zip(model.medians()) {
        println!("  {:<10} {:.2}", name, median);
    }

    println!("\nNumeric coefficients:");
    for (name, weight) in NUMERIC_FEATURES.iter().zip(model.numeric_coefficients()) {
        println!("  {:<10} {:+.5}", name, weight);
    }
    println!("  intercept  {:+.5}", model.intercept());

    // 3. Persist and reload
    let model_path = std::env::temp_dir().join("pune_estimator_example.bin");
    model.save_to_file(&model_path)?;
    let loaded = TrainedModel::load_from_file(&model_path)?;
    println!("\nModel saved to {:?} and reloaded", model_path);

    // 4. Single predictions, including a location never seen in training
    println!("\n=== Predictions ===\n");
    let spec = HouseSpec::new(1200.0, 2, 2, 1);
    for location in ["Baner", "Aundh", "Kalyani Nagar"] {
        let price = loaded.predict(&PriceQuery::new(spec, location))?;
        println!("Estimated Price in {}: ₹ {:.2} Lakhs", location, price);
    }

    // 5. Compare the same house across every known location
    println!("\nComparison for {} sqft, {} BHK:", spec.total_sqft, spec.bhk);
    for row in loaded.compare(&spec, loaded.locations())? {
        println!("  {:<18} ₹ {:>8.2} Lakhs", row.site_location, row.price);
    }

    std::fs::remove_file(model_path).ok();
    println!("\n=== Pipeline Complete ===");
    Ok(())
}
