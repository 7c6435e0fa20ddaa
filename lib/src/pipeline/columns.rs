//! Fitted column preprocessing: location indicators followed by imputed
//! numeric features.

use crate::features::{FeatureVector, NUMERIC_FEATURES, N_NUMERIC};
use crate::preprocessing::{
    FittedOneHotEncoder, FittedSimpleImputer, FittedTransformer, OneHotEncoder,
    PreprocessingError, SimpleImputer, Transformer,
};
use ndarray::{Array2, ArrayViewMut1, Axis};

/// The imputer and encoder learned from the training features.
///
/// Training and inference both build design rows through
/// [`write_row`](Self::write_row), so a query sees exactly the
/// transformation the regressor was fitted on.
#[derive(Clone, Debug)]
pub(crate) struct FittedColumns {
    pub(crate) imputer: FittedSimpleImputer,
    pub(crate) encoder: FittedOneHotEncoder,
}

impl FittedColumns {
    pub(crate) fn fit(
        features: &[FeatureVector],
        imputer: &SimpleImputer,
        encoder: &OneHotEncoder,
    ) -> Result<Self, PreprocessingError> {
        let numeric = Array2::from_shape_fn((features.len(), N_NUMERIC), |(row, col)| {
            features[row].numeric()[col]
        });
        let locations: Vec<String> = features.iter().map(|f| f.site_location.clone()).collect();

        Ok(Self {
            imputer: imputer.fit(&numeric)?,
            encoder: encoder.fit(&locations)?,
        })
    }

    pub(crate) fn new(
        imputer: FittedSimpleImputer,
        encoder: FittedOneHotEncoder,
    ) -> Result<Self, PreprocessingError> {
        if imputer.n_features_in() != N_NUMERIC {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: N_NUMERIC,
                got_features: imputer.n_features_in(),
            });
        }
        Ok(Self { imputer, encoder })
    }

    pub(crate) fn n_locations(&self) -> usize {
        self.encoder.n_features_out()
    }

    /// Width of a design row.
    pub(crate) fn n_features(&self) -> usize {
        self.n_locations() + N_NUMERIC
    }

    /// Column names in design-matrix order.
    pub(crate) fn feature_names(&self) -> Vec<String> {
        self.encoder
            .vocabulary()
            .categories()
            .iter()
            .map(|loc| format!("site_location={}", loc))
            .chain(NUMERIC_FEATURES.iter().map(|name| name.to_string()))
            .collect()
    }

    /// Encode one feature vector into `out`, which must be zeroed and
    /// [`n_features`](Self::n_features) long.
    pub(crate) fn write_row(
        &self,
        features: &FeatureVector,
        out: ArrayViewMut1<f64>,
    ) -> Result<(), PreprocessingError> {
        if out.len() != self.n_features() {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: self.n_features(),
                got_features: out.len(),
            });
        }

        let (locations, mut numeric) = out.split_at(Axis(0), self.n_locations());
        self.encoder.encode_into(&features.site_location, locations)?;
        let filled = self.imputer.fill_row(&features.numeric())?;
        for (slot, value) in numeric.iter_mut().zip(filled) {
            *slot = value;
        }
        Ok(())
    }

    /// Design matrix with one row per feature vector.
    pub(crate) fn design_matrix(
        &self,
        features: &[FeatureVector],
    ) -> Result<Array2<f64>, PreprocessingError> {
        let mut x = Array2::zeros((features.len(), self.n_features()));
        for (f, row) in features.iter().zip(x.rows_mut()) {
            self.write_row(f, row)?;
        }
        Ok(x)
    }
}
