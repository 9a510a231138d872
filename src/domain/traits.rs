// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - LinearClassifier implements Predictor
//   - A future OnnxClassifier could also implement Predictor
//   - The application layer only sees Predictor
//     and works with both without any changes
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::Result;
use crate::domain::feature_spec::FeatureVector;
use crate::domain::prediction::PredictionLabel;

// ─── Predictor ────────────────────────────────────────────────────────────────
/// An opaque pre-trained model as a capability: one operation,
/// single-sample prediction. The model's format and algorithm
/// stay hidden behind this seam so the adapter and presenter
/// never depend on them.
///
/// Implementations:
///   - LinearClassifier → standardized linear decision function
///   - (future) OnnxClassifier → ONNX runtime model
pub trait Predictor {
    /// Predict the binary class for one feature vector.
    ///
    /// The vector's length must equal `n_features()`; a mismatch
    /// is a contract violation and returns an error rather than
    /// being silently coerced.
    fn predict(&self, features: &FeatureVector) -> Result<PredictionLabel>;

    /// The input dimensionality this model was trained with.
    fn n_features(&self) -> usize;
}
