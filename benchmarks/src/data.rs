//! Synthetic housing data.
//!
//! Rows follow a known linear price model with a per-location premium plus
//! uniform noise, and carry the same kinds of dirty text as the real data:
//! `"N Bedroom"` sizes, `total_sqft` ranges, unparseable areas and missing
//! bath/balcony cells.

use pune_estimator::dataset::{HousingDataset, HousingRecord, REQUIRED_COLUMNS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

const PUNE_LOCATIONS: [&str; 20] = [
    "Alandi Road",
    "Ambegaon Budruk",
    "Anandnagar",
    "Aundh",
    "Balaji Nagar",
    "Baner",
    "Bibvewadi",
    "Bopodi",
    "Deccan Gymkhana",
    "Erandwane",
    "Hadapsar",
    "Kalyani Nagar",
    "Karve Nagar",
    "Kothrud",
    "Magarpatta",
    "Pashan",
    "Shivaji Nagar",
    "Viman Nagar",
    "Wagholi",
    "Yerawada",
];

/// Generator settings. Same settings and seed, same rows.
#[derive(Debug, Clone)]
pub struct SyntheticHousing {
    pub rows: usize,
    pub locations: usize,
    pub seed: u64,
}

impl Default for SyntheticHousing {
    fn default() -> Self {
        Self {
            rows: 10_000,
            locations: PUNE_LOCATIONS.len(),
            seed: 42,
        }
    }
}

impl SyntheticHousing {
    pub fn new(rows: usize, locations: usize) -> Self {
        Self {
            rows,
            locations: locations.max(1),
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Location names; real ones first, numbered sectors after that.
    pub fn location_names(&self) -> Vec<String> {
        (0..self.locations)
            .map(|i| match PUNE_LOCATIONS.get(i) {
                Some(name) => name.to_string(),
                None => format!("Sector {}", i + 1),
            })
            .collect()
    }

    pub fn records(&self) -> Vec<HousingRecord> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let names = self.location_names();
        let premiums: Vec<f64> = names.iter().map(|_| rng.gen_range(-20.0..40.0)).collect();

        (0..self.rows)
            .map(|_| {
                let loc = rng.gen_range(0..names.len());
                let bhk: u32 = rng.gen_range(1..=5);
                let sqft = 400.0 + f64::from(bhk) * 350.0 + rng.gen_range(-150.0..150.0);
                let bath = (bhk + rng.gen_range(0..=1)).clamp(1, 5);
                let balcony: u32 = rng.gen_range(0..=3);
                let price = 0.045 * sqft
                    + 6.0 * f64::from(bhk)
                    + 2.0 * f64::from(bath)
                    + premiums[loc]
                    + rng.gen_range(-5.0..5.0);

                let size = if rng.gen_bool(0.1) {
                    format!("{} Bedroom", bhk)
                } else {
                    format!("{} BHK", bhk)
                };
                let total_sqft = match rng.gen_range(0..100) {
                    0..=2 => format!("{:.0}-{:.0}", sqft - 100.0, sqft + 100.0),
                    3 => format!("{:.2}Sq. Meter", sqft / 10.764),
                    _ => format!("{:.0}", sqft),
                };
                let bath = (!rng.gen_bool(0.02)).then_some(f64::from(bath));
                let balcony = (!rng.gen_bool(0.05)).then_some(f64::from(balcony));

                HousingRecord::new(size, total_sqft, bath, balcony, names[loc].clone(), price)
            })
            .collect()
    }

    pub fn dataset(&self) -> HousingDataset {
        HousingDataset::from_records(self.records())
    }
}

/// First `train_ratio` of the rows for training, the rest for testing.
pub fn split(dataset: &HousingDataset, train_ratio: f64) -> (HousingDataset, HousingDataset) {
    let n_train = ((dataset.len() as f64 * train_ratio) as usize).min(dataset.len());
    let (train, test) = dataset.records().split_at(n_train);
    (
        HousingDataset::from_records(train.to_vec()),
        HousingDataset::from_records(test.to_vec()),
    )
}

/// Write records as a CSV the loader accepts.
pub fn write_csv<P: AsRef<Path>>(records: &[HousingRecord], path: P) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(REQUIRED_COLUMNS)?;
    let opt = |v: Option<f64>| v.map(|x| x.to_string()).unwrap_or_default();
    for r in records {
        wtr.write_record([
            r.size.clone().unwrap_or_default(),
            r.total_sqft.clone().unwrap_or_default(),
            opt(r.bath),
            opt(r.balcony),
            r.site_location.clone(),
            r.price.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_seeded() {
        let a = SyntheticHousing::new(200, 5).records();
        let b = SyntheticHousing::new(200, 5).records();
        let c = SyntheticHousing::new(200, 5).with_seed(7).records();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_location_names() {
        let names = SyntheticHousing::new(10, 22).location_names();
        assert_eq!(names.len(), 22);
        assert_eq!(names[0], "Alandi Road");
        assert_eq!(names[21], "Sector 22");
    }

    #[test]
    fn test_split() {
        let dataset = SyntheticHousing::new(100, 4).dataset();
        let (train, test) = split(&dataset, 0.8);
        assert_eq!(train.len(), 80);
        assert_eq!(test.len(), 20);
    }

    #[test]
    fn test_csv_round_trip_through_loader() {
        let records = SyntheticHousing::new(50, 3).records();
        let path = std::env::temp_dir().join("pune_estimator_synthetic.csv");
        write_csv(&records, &path).unwrap();

        let loaded = HousingDataset::load(&path).unwrap();
        assert_eq!(loaded.len(), 50);
        assert_eq!(loaded.records()[0].site_location, records[0].site_location);
        std::fs::remove_file(path).ok();
    }
}
