//! Collect fit/predict timings and accuracy for the price estimator.
//!
//! Generates a seeded synthetic dataset (or loads a CSV given as the first
//! argument), fits on 80% of the rows and scores the remainder, then writes
//! everything as JSON to `benchmarks/results/rust_metrics.json`.

use benchmarks::{measure, split, SyntheticHousing};
use pune_estimator::dataset::HousingDataset;
use pune_estimator::pipeline::{HouseSpec, PriceEstimator, PriceQuery};
use serde_json::json;
use std::error::Error;
use std::fs;
use std::path::Path;

const OUTPUT: &str = "benchmarks/results/rust_metrics.json";

fn collect(label: &str, dataset: &HousingDataset) -> Result<serde_json::Value, Box<dyn Error>> {
    println!("Collecting metrics for {} ({} rows)...", label, dataset.len());
    let (train, test) = split(dataset, 0.8);
    let estimator = PriceEstimator::new();

    let (model, fit_timing) = measure(1, 5, || estimator.fit(&train));
    let model = model?;

    let spec = HouseSpec::new(1200.0, 2, 2, 1);
    let location = model.locations().first().cloned().unwrap_or_default();
    let query = PriceQuery::new(spec, location);
    let (price, predict_timing) = measure(100, 1000, || model.predict(&query));
    price?;

    let (compared, compare_timing) = measure(10, 100, || model.compare(&spec, model.locations()));
    compared?;

    let train_metrics = model.score(&train)?;
    let test_metrics = model.score(&test)?;
    println!(
        "  fit {:.2} ms, test R² {:.4}, test RMSE {:.2}",
        fit_timing.mean_ms, test_metrics.r2, test_metrics.rmse
    );

    Ok(json!({
        "dataset": label,
        "rows": dataset.len(),
        "locations": model.locations().len(),
        "fit": fit_timing.to_json(),
        "predict": predict_timing.to_json(),
        "compare_all_locations": compare_timing.to_json(),
        "train": serde_json::to_value(train_metrics)?,
        "test": serde_json::to_value(test_metrics)?,
    }))
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut runs = Vec::new();

    match std::env::args().nth(1) {
        Some(path) => {
            let dataset = HousingDataset::load(&path)?;
            runs.push(collect(&path, &dataset)?);
        }
        None => {
            for rows in [1_000, 10_000, 50_000] {
                let dataset = SyntheticHousing::new(rows, 20).dataset();
                runs.push(collect(&format!("synthetic_{}", rows), &dataset)?);
            }
        }
    }

    let output = json!({
        "library": "pune-estimator",
        "version": env!("CARGO_PKG_VERSION"),
        "runs": runs,
    });

    if let Some(dir) = Path::new(OUTPUT).parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(OUTPUT, serde_json::to_string_pretty(&output)?)?;
    println!("\nMetrics collected and saved to {}", OUTPUT);
    Ok(())
}
