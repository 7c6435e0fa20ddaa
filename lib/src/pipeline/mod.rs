//! End-to-end price estimation.
//!
//! [`PriceEstimator`] holds the unfitted pipeline: median imputation of the
//! numeric features, one-hot encoding of `site_location` and ordinary least
//! squares. Fitting it on a [`HousingDataset`] yields an immutable
//! [`TrainedModel`] that answers queries by shared reference.
//!
//! # Example
//!
//! ```no_run
//! use pune_estimator::dataset::HousingDataset;
//! use pune_estimator::pipeline::{HouseSpec, PriceEstimator, PriceQuery};
//!
//! let dataset = HousingDataset::load("Pune house data.csv")?;
//! let model = PriceEstimator::new().fit(&dataset)?;
//!
//! let query = PriceQuery::new(HouseSpec::new(1200.0, 2, 2, 1), "Baner");
//! println!("₹ {:.2} Lakhs", model.predict(&query)?);
//! # Ok::<(), pune_estimator::EstimatorError>(())
//! ```

mod columns;
mod query;

pub use query::{
    HouseSpec, LocationPrice, PriceQuery, BALCONY_RANGE, BATH_RANGE, BHK_RANGE, TOTAL_SQFT_RANGE,
};

use crate::config::EstimatorConfig;
use crate::dataset::HousingDataset;
use crate::error::{EstimatorError, Result};
use crate::features::{FeatureVector, N_NUMERIC};
use crate::metrics::RegressionMetrics;
use crate::model::{
    Fitted, InferenceModel, LinearModel, LinearParams, LinearRegression, ModelError,
    SerializableLinearParams,
};
use crate::preprocessing::{
    FittedOneHotEncoder, FittedSimpleImputer, FittedTransformer, HandleUnknown, OneHotEncoder,
    OneHotEncoderParams, SimpleImputer, SimpleImputerParams,
};
use crate::serialization::SerializableParams;
use columns::FittedColumns;
use ndarray::{s, Array1, Array2, ArrayView1, ArrayViewMut1, Axis};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Unfitted estimator pipeline.
#[derive(Clone, Debug)]
pub struct PriceEstimator {
    imputer: SimpleImputer,
    encoder: OneHotEncoder,
    regression: LinearRegression,
}

impl Default for PriceEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceEstimator {
    /// Median imputation, unknown locations encoded as all zeros, OLS with
    /// an intercept.
    pub fn new() -> Self {
        Self {
            imputer: SimpleImputer::new(),
            encoder: OneHotEncoder::new().with_handle_unknown(HandleUnknown::Ignore),
            regression: LinearRegression::new(),
        }
    }

    pub fn from_config(config: &EstimatorConfig) -> Self {
        Self::new().with_handle_unknown(config.handle_unknown)
    }

    pub fn with_handle_unknown(mut self, strategy: HandleUnknown) -> Self {
        self.encoder = self.encoder.with_handle_unknown(strategy);
        self
    }

    /// Fit every stage on `dataset`.
    ///
    /// # Errors
    /// [`EstimatorError::EmptyDataset`] when there are no rows, otherwise
    /// whatever the imputer, encoder or solver reports.
    pub fn fit(&self, dataset: &HousingDataset) -> Result<TrainedModel> {
        if dataset.is_empty() {
            return Err(EstimatorError::EmptyDataset(
                "no rows with both a price and a site_location".to_string(),
            ));
        }

        let features: Vec<FeatureVector> =
            dataset.records().iter().map(FeatureVector::derive).collect();
        let columns = FittedColumns::fit(&features, &self.imputer, &self.encoder)?;
        let x = columns.design_matrix(&features)?;
        let y = Array1::from(dataset.targets());
        let model = self.regression.fit(&x, &y)?;
        let model = center_location_weights(model, columns.n_locations(), &x, &y);

        let trained = TrainedModel { columns, model };
        let predictions = trained.model.predict_batch(&x)?;
        let metrics = RegressionMetrics::compute(&dataset.targets(), &predictions.to_vec());
        info!(
            rows = dataset.len(),
            locations = trained.columns.n_locations(),
            intercept = trained.intercept(),
            r2 = metrics.r2,
            rmse = metrics.rmse,
            "fitted price estimator"
        );
        Ok(trained)
    }
}

/// Drop the all-ones component of the location weights and recompute the
/// intercept as `ȳ − x̄·w`.
///
/// Every training row has exactly one location, so with an intercept the
/// centred indicator columns sum to zero and that component never changes
/// a known-location price. Removing it leaves the minimum-norm solution,
/// which fixes the price of a location outside the vocabulary.
fn center_location_weights(
    model: LinearModel<Fitted>,
    n_locations: usize,
    x: &Array2<f64>,
    y: &Array1<f64>,
) -> LinearModel<Fitted> {
    let mut weights = model.coefficients().to_owned();
    let Some(shift) = weights.slice(s![..n_locations]).mean() else {
        return model;
    };
    weights
        .slice_mut(s![..n_locations])
        .mapv_inplace(|w| w - shift);

    let x_mean = x
        .mean_axis(Axis(0))
        .unwrap_or_else(|| Array1::zeros(weights.len()));
    let bias = y.mean().unwrap_or(0.0) - x_mean.dot(&weights);
    debug!(shift, bias, "centred location weights");
    LinearModel::<Fitted>::new(LinearParams { weights, bias })
}

/// A fitted pipeline. Immutable; share it by reference across queries.
#[derive(Clone, Debug)]
pub struct TrainedModel {
    columns: FittedColumns,
    model: LinearModel<Fitted>,
}

/// Serializable parameters of a [`TrainedModel`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainedModelParams {
    pub imputer: SimpleImputerParams,
    pub encoder: OneHotEncoderParams,
    pub model: SerializableLinearParams,
}

impl TrainedModel {
    /// Predict the price of already-derived features.
    pub fn predict_features(&self, features: &FeatureVector) -> Result<f64> {
        let mut row = vec![0.0; self.columns.n_features()];
        self.columns
            .write_row(features, ArrayViewMut1::from(&mut row[..]))?;
        Ok(self.model.predict(&row)?)
    }

    /// Predicted price in Lakhs for a validated query.
    pub fn predict(&self, query: &PriceQuery) -> Result<f64> {
        query.validate()?;
        self.predict_features(&query.features())
    }

    /// Price the same house in several locations.
    ///
    /// Results follow input order; a repeated location is priced once, at
    /// its first position. Each price equals the single-location
    /// [`predict`](Self::predict) for that location.
    pub fn compare<S: AsRef<str>>(
        &self,
        spec: &HouseSpec,
        locations: &[S],
    ) -> Result<Vec<LocationPrice>> {
        spec.validate()?;
        let mut seen = HashSet::new();
        let mut results = Vec::with_capacity(locations.len());
        for location in locations {
            let location = location.as_ref().trim();
            query::validate_location(location)?;
            if !seen.insert(location) {
                continue;
            }
            results.push(LocationPrice {
                site_location: location.to_string(),
                price: self.predict_features(&spec.at(location))?,
            });
        }
        Ok(results)
    }

    /// Locations known to the encoder, sorted.
    pub fn locations(&self) -> &[String] {
        self.columns.encoder.vocabulary().categories()
    }

    /// Training medians of `total_sqft, bhk, bath, balcony`.
    pub fn medians(&self) -> &[f64] {
        self.columns.imputer.statistics()
    }

    /// Regression weights in design-matrix order, see
    /// [`feature_names`](Self::feature_names).
    pub fn coefficients(&self) -> ArrayView1<f64> {
        self.model.coefficients()
    }

    pub fn feature_names(&self) -> Vec<String> {
        self.columns.feature_names()
    }

    pub fn intercept(&self) -> f64 {
        self.model.intercept()
    }

    /// Weight of a location's indicator column, `None` if it is unknown.
    pub fn location_coefficient(&self, location: &str) -> Option<f64> {
        let idx = self
            .locations()
            .binary_search_by(|known| known.as_str().cmp(location.trim()))
            .ok()?;
        Some(self.model.coefficients()[idx])
    }

    /// Weights of `total_sqft, bhk, bath, balcony`.
    pub fn numeric_coefficients(&self) -> ArrayView1<f64> {
        let offset = self.columns.n_locations();
        self.model
            .coefficients()
            .slice_move(s![offset..offset + N_NUMERIC])
    }

    /// Score predictions against the prices in `dataset`.
    pub fn score(&self, dataset: &HousingDataset) -> Result<RegressionMetrics> {
        let features: Vec<FeatureVector> =
            dataset.records().iter().map(FeatureVector::derive).collect();
        let x = self.columns.design_matrix(&features)?;
        let predictions = self.model.predict_batch(&x)?;
        Ok(RegressionMetrics::compute(
            &dataset.targets(),
            &predictions.to_vec(),
        ))
    }

    pub fn extract_params(&self) -> TrainedModelParams {
        TrainedModelParams {
            imputer: self.columns.imputer.extract_params(),
            encoder: self.columns.encoder.extract_params(),
            model: self.model.extract_params(),
        }
    }

    /// Rebuild a model from its parameters, checking that the stages agree
    /// on the design width.
    pub fn from_params(params: TrainedModelParams) -> Result<Self> {
        let imputer = FittedSimpleImputer::from_params(params.imputer)?;
        let encoder = FittedOneHotEncoder::from_params(params.encoder)?;
        let columns = FittedColumns::new(imputer, encoder)?;
        let model = LinearModel::<Fitted>::from_params(params.model)?;
        if model.n_features() != columns.n_features() {
            return Err(ModelError::ShapeMismatch(format!(
                "model has {} weights but the preprocessing produces {} columns",
                model.n_features(),
                columns.n_features()
            ))
            .into());
        }
        Ok(Self { columns, model })
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.extract_params().to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_params(TrainedModelParams::from_bytes(&bytes)?)
    }
}
