// ============================================================
// Layer 4 — Data Layer
// ============================================================
// Everything between the raw form submission and a model-ready
// feature vector:
//
//   raw text values (field order)
//       │
//       ▼
//   FeatureAdapter    → shape check, numeric conversion
//       │
//       ▼
//   FeatureVector     → handed to the inference call
//
// This is the only place untyped user input is touched. Once a
// FeatureVector exists, everything downstream is typed and the
// length is known to match the domain's spec.
//
// Reference: Rust Book §8 (Strings), §9 (Error Handling)

/// Converts raw text values into a validated feature vector
pub mod adapter;
