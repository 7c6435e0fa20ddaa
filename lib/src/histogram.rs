//! Equal-width histograms of observed prices.

use serde::Serialize;

/// Equal-width histogram over `[min, max]`; the last bin includes `max`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Histogram {
    min: f64,
    max: f64,
    counts: Vec<usize>,
}

impl Histogram {
    /// Bin the finite entries of `values` into `bins` buckets.
    ///
    /// Returns `None` when there is nothing to bin or `bins == 0`. A single
    /// distinct value is centred in a unit-wide range.
    pub fn from_values(values: &[f64], bins: usize) -> Option<Self> {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() || bins == 0 {
            return None;
        }

        let (mut min, mut max) = finite
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if min == max {
            min -= 0.5;
            max += 0.5;
        }

        let mut histogram = Self {
            min,
            max,
            counts: vec![0; bins],
        };
        for value in finite {
            if let Some(bin) = histogram.bin_of(value) {
                histogram.counts[bin] += 1;
            }
        }
        Some(histogram)
    }

    /// Index of the bin containing `value`, or `None` outside `[min, max]`.
    pub fn bin_of(&self, value: f64) -> Option<usize> {
        if !(self.min..=self.max).contains(&value) {
            return None;
        }
        let bin = ((value - self.min) / self.bin_width()) as usize;
        Some(bin.min(self.counts.len() - 1))
    }

    pub fn bin_width(&self) -> f64 {
        (self.max - self.min) / self.counts.len() as f64
    }

    /// `(lower, upper)` edges of every bin.
    pub fn edges(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let width = self.bin_width();
        (0..self.counts.len()).map(move |i| {
            let lower = self.min + width * i as f64;
            (lower, lower + width)
        })
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}
