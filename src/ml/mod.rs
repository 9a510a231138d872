// ============================================================
// Layer 5 — ML / Model Layer
// ============================================================
// This layer contains ALL model-format specific code.
// No other layer knows how a model is serialized or what
// algorithm it implements — only this one.
//
// Why isolate model code here?
//   - If the artifact format changes, we only update this layer
//   - Other layers are testable without model files
//   - The Predictor trait (Layer 3) is the only surface the
//     rest of the system sees
//
// What's in this layer:
//
//   model.rs — The linear classifier
//              Loads a JSON artifact (scaler statistics,
//              coefficients, intercept), validates its shape,
//              and implements single-sample prediction:
//              standardize → dot product → threshold.
//
// Reference: Rust Book §10 (Traits)
//            serde documentation (derive)

/// Linear classifier artifact format and inference
pub mod model;
