/// Marker type: the model has not been fitted yet.
///
/// `LinearModel<Unfitted>` only carries fit options; it has no `predict`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unfitted;

/// Marker type: the model has been fitted.
///
/// `LinearModel<Fitted>` carries only inference parameters (coefficients and
/// intercept) and implements [`InferenceModel`](super::InferenceModel).
#[derive(Clone, Copy, Debug, Default)]
pub struct Fitted;
