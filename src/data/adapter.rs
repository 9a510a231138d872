// ============================================================
// Layer 4 — Feature Adapter
// ============================================================
// Converts one submission's raw text values into the fixed-
// length numeric vector the domain's model expects, or rejects
// the whole batch.
//
// Contract:
//   - Values are matched to fields positionally: value i is
//     field i of the domain's FeatureSpec, which is column i
//     of the training data.
//   - The shape is checked first; a wrong field count never
//     reaches the parser (and never reaches the model).
//   - Each value is ASCII-trimmed and parsed as f64 with Rust's
//     standard decimal syntax. The empty string is invalid, not
//     zero.
//   - The first parse failure invalidates the entire batch.
//     No partial vector is ever produced and no per-field
//     detail leaves this function — all conversion failures
//     collapse into the single InvalidInput signal.
//   - No range or plausibility checks: a negative age parses
//     fine. Syntactic conversion only.
//
// Pure function of its inputs; no side effects, no logging of
// submitted values (they are clinical data).
//
// Reference: Rust Book §8 (Strings), §13 (Iterators)

use crate::domain::error::PredictError;
use crate::domain::feature_spec::{Domain, FeatureSpec, FeatureVector};

/// Validates and converts raw submissions for one domain.
pub struct FeatureAdapter {
    spec: &'static FeatureSpec,
}

impl FeatureAdapter {
    /// Create the adapter for a domain's feature spec.
    pub fn for_domain(domain: Domain) -> Self {
        Self { spec: domain.spec() }
    }

    /// Convert raw text values (in field order) into a
    /// FeatureVector, or fail with a validation error.
    pub fn convert(&self, raw: &[String]) -> Result<FeatureVector, PredictError> {
        // Shape first: a missing or extra field is rejected
        // before any value is parsed
        if raw.len() != self.spec.len() {
            return Err(PredictError::WrongFieldCount {
                expected: self.spec.len(),
                got:      raw.len(),
            });
        }

        let mut values = Vec::with_capacity(raw.len());
        for value in raw {
            // trim() handles copy-pasted values with stray
            // whitespace; "" and "abc" both fail parse() and
            // short-circuit the batch
            let parsed: f64 = value
                .trim()
                .parse()
                .map_err(|_| PredictError::InvalidInput)?;
            values.push(parsed);
        }

        Ok(FeatureVector::new(values))
    }
}
