// ============================================================
// Layer 5 — Linear Classifier
// ============================================================
// The pre-trained models this system serves are standardized
// linear classifiers exported from their training environment
// as JSON artifacts:
//
//   {
//     "algorithm":    "linear_svc" | "logistic_regression",
//     "n_features":   8,
//     "scaler_mean":  [...],   // per-feature training mean
//     "scaler_scale": [...],   // per-feature training std dev
//     "coefficients": [...],   // learned weights
//     "intercept":    -0.83
//   }
//
// Prediction for one sample x:
//   z = Σ coef[i] * (x[i] - mean[i]) / scale[i]  +  intercept
//   label = Positive  iff  z > 0
//
// The sign threshold is identical for both algorithms: a linear
// SVM's decision function and a logistic regression's log-odds
// cross zero at the same boundary. The algorithm tag only
// decides whether a calibrated probability exists (sigmoid of z
// for logistic regression; none for the SVM margin).
//
// Every artifact is validated at load time — wrong array
// lengths or a zero scale entry mean a corrupted or
// incompatible artifact and fail the load, never a prediction.
//
// Reference: Rust Book §10 (Traits)

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::error::PredictError;
use crate::domain::feature_spec::FeatureVector;
use crate::domain::prediction::PredictionLabel;
use crate::domain::traits::Predictor;

/// Which training algorithm produced the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    LogisticRegression,
    LinearSvc,
}

/// A pre-trained standardized linear classifier.
/// Immutable after load; prediction never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    /// Training algorithm tag
    pub algorithm: ModelKind,

    /// Input dimensionality the model was trained with
    pub n_features: usize,

    /// Per-feature mean of the training data (standardization)
    pub scaler_mean: Vec<f64>,

    /// Per-feature standard deviation of the training data
    pub scaler_scale: Vec<f64>,

    /// Learned weight per standardized feature
    pub coefficients: Vec<f64>,

    /// Learned bias term
    pub intercept: f64,
}

impl LinearClassifier {
    /// Load and validate a model artifact from a JSON file.
    ///
    /// Fails if the file is missing, is not valid JSON for this
    /// format, or is internally inconsistent (array lengths not
    /// matching n_features, or a zero scale entry). All of these
    /// are startup errors — a model that loads will never fail
    /// for format reasons at prediction time.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path)
            .with_context(|| {
                format!("Cannot read model artifact '{}'", path.display())
            })?;

        let model: LinearClassifier = serde_json::from_str(&json)
            .with_context(|| {
                format!("Model artifact '{}' is not in the expected format",
                    path.display())
            })?;

        model.validate()
            .with_context(|| {
                format!("Model artifact '{}' is corrupted", path.display())
            })?;

        tracing::debug!(
            "Loaded {:?} model with {} features from '{}'",
            model.algorithm, model.n_features, path.display(),
        );

        Ok(model)
    }

    /// Internal consistency check for a deserialized artifact.
    fn validate(&self) -> Result<()> {
        if self.n_features == 0 {
            bail!("n_features must be positive");
        }
        for (name, len) in [
            ("scaler_mean",  self.scaler_mean.len()),
            ("scaler_scale", self.scaler_scale.len()),
            ("coefficients", self.coefficients.len()),
        ] {
            if len != self.n_features {
                bail!("{name} has {len} entries, expected {}", self.n_features);
            }
        }
        if self.scaler_scale.iter().any(|&s| s == 0.0 || !s.is_finite()) {
            bail!("scaler_scale contains a zero or non-finite entry");
        }
        Ok(())
    }

    /// The decision-function value for one sample.
    /// Positive values fall on the condition-present side of the
    /// learned boundary.
    ///
    /// Checks the vector length like `predict` does: a mismatch
    /// is a contract error, never a panic.
    pub fn decision_function(&self, features: &FeatureVector) -> Result<f64> {
        self.check_dims(features)?;
        Ok(self.score(features.as_slice()))
    }

    /// Calibrated probability of the positive class, when the
    /// algorithm provides one. A logistic regression's sigmoid
    /// is a probability; an SVM margin is not, so `Ok(None)`.
    pub fn probability(&self, features: &FeatureVector) -> Result<Option<f64>> {
        self.check_dims(features)?;
        match self.algorithm {
            ModelKind::LogisticRegression => {
                let z = self.score(features.as_slice());
                Ok(Some(1.0 / (1.0 + (-z).exp())))
            }
            ModelKind::LinearSvc => Ok(None),
        }
    }

    /// Contract check shared by every scoring entry point: the
    /// adapter has already shape-checked the submission, so a
    /// mismatch here is a programming defect and fails loudly.
    fn check_dims(&self, features: &FeatureVector) -> Result<()> {
        if features.len() != self.n_features {
            return Err(PredictError::DimensionMismatch {
                expected: self.n_features,
                got:      features.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Unchecked scoring core. Callers must have verified the
    /// slice length against n_features.
    fn score(&self, x: &[f64]) -> f64 {
        let mut z = self.intercept;
        for i in 0..self.n_features {
            let standardized = (x[i] - self.scaler_mean[i]) / self.scaler_scale[i];
            z += self.coefficients[i] * standardized;
        }
        z
    }
}

impl Predictor for LinearClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<PredictionLabel> {
        self.check_dims(features)?;

        let z = self.score(features.as_slice());

        let label = if z > 0.0 {
            PredictionLabel::Positive
        } else {
            PredictionLabel::Negative
        };

        tracing::debug!("decision={:.4} label={:?}", z, label);
        Ok(label)
    }

    fn n_features(&self) -> usize {
        self.n_features
    }
}
