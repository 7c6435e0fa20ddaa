//! Subcommand implementations.

use crate::render;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use pune_estimator::booking::{BookingLog, BookingRequest, BusSchedule};
use pune_estimator::dataset::HousingDataset;
use pune_estimator::histogram::Histogram;
use pune_estimator::{EstimatorConfig, HouseSpec, PriceEstimator, PriceQuery, TrainedModel};
use std::path::Path;
use tracing::info;

fn load(config: &EstimatorConfig) -> Result<HousingDataset> {
    HousingDataset::load(&config.dataset_path)
        .with_context(|| format!("failed to load {}", config.dataset_path.display()))
}

fn fit(config: &EstimatorConfig, dataset: &HousingDataset) -> Result<TrainedModel> {
    PriceEstimator::from_config(config)
        .fit(dataset)
        .context("failed to fit the price estimator")
}

pub fn predict(config: &EstimatorConfig, spec: &HouseSpec, location: &str) -> Result<()> {
    let dataset = load(config)?;
    let model = fit(config, &dataset)?;
    let location = location.trim();
    let price = model.predict(&PriceQuery::new(*spec, location))?;

    println!("Estimated Price in {}: ₹ {:.2} Lakhs", location, price);

    let prices = dataset.prices_in(location);
    match Histogram::from_values(&prices, config.histogram_bins) {
        Some(histogram) => {
            println!("\nPrice Distribution in {}", location);
            print!("{}", render::histogram(&histogram, price));
        }
        None if prices.is_empty() => println!("\nNo recorded prices for {}", location),
        None => println!("\nPrice distribution needs at least one bin"),
    }
    Ok(())
}

pub fn compare(config: &EstimatorConfig, spec: &HouseSpec, locations: &[String]) -> Result<()> {
    let dataset = load(config)?;
    let model = fit(config, &dataset)?;
    let rows = model.compare(spec, locations)?;

    println!("{}", render::comparison_table(&rows));
    println!();
    print!("{}", render::bar_chart(&rows));
    Ok(())
}

pub fn locations(config: &EstimatorConfig) -> Result<()> {
    let dataset = load(config)?;
    for location in dataset.locations() {
        println!("{}", location);
    }
    Ok(())
}

pub fn buses(source: Option<&str>, destination: Option<&str>) {
    let schedule = BusSchedule::default();
    let buses: Vec<_> = schedule
        .buses()
        .iter()
        .filter(|bus| source.map_or(true, |s| bus.source == s))
        .filter(|bus| destination.map_or(true, |d| bus.destination == d))
        .collect();

    if buses.is_empty() {
        println!("No buses available for the selected route.");
    } else {
        println!("{}", render::bus_table(&buses));
    }
}

pub fn book(
    config: &EstimatorConfig,
    source: String,
    destination: String,
    bus_id: String,
    name: String,
    date: Option<NaiveDate>,
) -> Result<()> {
    let now = Local::now().naive_local();
    let today = now.date();
    let request = BookingRequest {
        name,
        source,
        destination,
        bus_id,
        travel_date: date.unwrap_or(today),
    };

    let booking = request.confirm(&BusSchedule::default(), today, now)?;
    BookingLog::new(&config.booking_log_path).append(&booking)?;
    println!("{}", booking.confirmation());
    Ok(())
}

pub fn bookings(config: &EstimatorConfig) -> Result<()> {
    let bookings = BookingLog::new(&config.booking_log_path).load()?;
    if bookings.is_empty() {
        println!("No bookings yet.");
    } else {
        println!("{}", render::booking_table(&bookings));
    }
    Ok(())
}

pub fn export(config: &EstimatorConfig, output: &Path) -> Result<()> {
    let dataset = load(config)?;
    let model = fit(config, &dataset)?;
    model
        .save_to_file(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(path = %output.display(), "trained model saved");
    println!("Model saved to {}", output.display());
    Ok(())
}
