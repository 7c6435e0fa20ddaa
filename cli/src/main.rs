//! Pune house-price estimator CLI
//!
//! Price a house, compare locations, and book buses from the command line.

mod commands;
mod render;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use pune_estimator::config::{
    EstimatorConfig, DEFAULT_BOOKING_LOG_PATH, DEFAULT_DATASET_PATH, DEFAULT_HISTOGRAM_BINS,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pune-estimator")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pune house-price estimator and bus booking", long_about = None)]
struct Cli {
    /// Housing dataset (CSV)
    #[arg(long, global = true, default_value = DEFAULT_DATASET_PATH)]
    dataset: PathBuf,

    /// Booking log (CSV)
    #[arg(long, global = true, default_value = DEFAULT_BOOKING_LOG_PATH)]
    bookings: PathBuf,

    /// Number of bins in the price distribution
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_HISTOGRAM_BINS,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    bins: usize,

    #[command(subcommand)]
    command: Commands,
}

/// Numeric description of the house being priced.
#[derive(clap::Args)]
struct HouseArgs {
    /// Total area in square feet (300 - 10000)
    #[arg(long, default_value_t = 1000.0)]
    sqft: f64,

    /// Number of bedrooms (1 - 10)
    #[arg(long, default_value_t = 2)]
    bhk: u32,

    /// Number of bathrooms (1 - 5)
    #[arg(long, default_value_t = 2)]
    bath: u32,

    /// Number of balconies (0 - 5)
    #[arg(long, default_value_t = 1)]
    balcony: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the price of a house in one location
    Predict {
        #[command(flatten)]
        house: HouseArgs,

        /// Site location
        #[arg(short, long)]
        location: String,
    },

    /// Estimate the same house in several locations
    Compare {
        #[command(flatten)]
        house: HouseArgs,

        /// Site location; repeat for each location to compare
        #[arg(short, long = "location", required = true)]
        locations: Vec<String>,
    },

    /// List the locations present in the dataset
    Locations,

    /// Show the bus timetable
    Buses {
        #[arg(long)]
        source: Option<String>,

        #[arg(long)]
        destination: Option<String>,
    },

    /// Book a bus ticket
    Book {
        #[arg(long)]
        source: String,

        #[arg(long)]
        destination: String,

        /// Bus ID, e.g. B001
        #[arg(long)]
        bus: String,

        /// Traveller name
        #[arg(long)]
        name: String,

        /// Travel date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List all bookings
    Bookings,

    /// Fit the estimator and save it to a file
    Export {
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pune_estimator=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = EstimatorConfig::default()
        .with_dataset_path(cli.dataset)
        .with_booking_log_path(cli.bookings)
        .with_histogram_bins(cli.bins);

    match cli.command {
        Commands::Predict { house, location } => {
            commands::predict(&config, &house.into(), &location)?;
        }
        Commands::Compare { house, locations } => {
            commands::compare(&config, &house.into(), &locations)?;
        }
        Commands::Locations => {
            commands::locations(&config)?;
        }
        Commands::Buses {
            source,
            destination,
        } => {
            commands::buses(source.as_deref(), destination.as_deref());
        }
        Commands::Book {
            source,
            destination,
            bus,
            name,
            date,
        } => {
            commands::book(&config, source, destination, bus, name, date)?;
        }
        Commands::Bookings => {
            commands::bookings(&config)?;
        }
        Commands::Export { output } => {
            commands::export(&config, &output)?;
        }
    }

    Ok(())
}

impl From<HouseArgs> for pune_estimator::HouseSpec {
    fn from(args: HouseArgs) -> Self {
        Self::new(args.sqft, args.bhk, args.bath, args.balcony)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bins_default() {
        let cli = Cli::try_parse_from(["pune-estimator", "locations"]).unwrap();
        assert_eq!(cli.bins, DEFAULT_HISTOGRAM_BINS);
    }

    #[test]
    fn test_bins_must_be_positive() {
        assert!(Cli::try_parse_from(["pune-estimator", "--bins", "0", "locations"]).is_err());
        assert!(
            Cli::try_parse_from(["pune-estimator", "predict", "-l", "Baner", "--bins", "0"])
                .is_err()
        );

        let cli = Cli::try_parse_from(["pune-estimator", "--bins", "5", "locations"]).unwrap();
        assert_eq!(cli.bins, 5);
    }

    #[test]
    fn test_predict_house_defaults() {
        let cli = Cli::try_parse_from(["pune-estimator", "predict", "--location", "Baner"]).unwrap();
        match cli.command {
            Commands::Predict { house, location } => {
                assert_eq!(location, "Baner");
                let spec: pune_estimator::HouseSpec = house.into();
                assert_eq!(spec.total_sqft, 1000.0);
                assert_eq!(spec.bhk, 2);
            }
            _ => panic!("expected predict"),
        }
    }
}
