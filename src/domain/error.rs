// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Three families of failure exist in this system:
//
//   1. Validation errors   — the user typed something that is
//      not a number, or submitted the wrong number of fields.
//      Recoverable; collapsed to ONE generic message at the
//      submission boundary (no per-field detail by design).
//   2. Store errors        — a domain's model artifact failed
//      to load at startup, so that domain cannot serve.
//   3. Contract errors     — a feature vector reached a model
//      with the wrong dimensionality. This is a programming
//      defect, never a user error, and must fail loudly.
//
// The CLI layer decides which of these collapse into the
// generic user message; this enum only names them.
//
// Reference: Rust Book §9 (Error Handling)

use crate::domain::feature_spec::Domain;
use std::fmt;

/// Everything that can go wrong between a raw submission and a
/// prediction label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictError {
    /// At least one field failed numeric conversion. Deliberately
    /// carries no field detail — all conversion failures collapse
    /// into this one signal.
    InvalidInput,

    /// The submission had the wrong number of fields for the
    /// domain's feature spec. Caught before any parsing.
    WrongFieldCount { expected: usize, got: usize },

    /// The domain's model artifact did not load at startup, so
    /// no prediction can be served for it.
    ModelUnavailable(Domain),

    /// A feature vector of the wrong length reached a model.
    /// The adapter makes this unreachable in normal operation;
    /// seeing it means a programming defect.
    DimensionMismatch { expected: usize, got: usize },
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::InvalidInput => {
                write!(f, "one or more fields are not valid numbers")
            }
            PredictError::WrongFieldCount { expected, got } => {
                write!(f, "expected {expected} fields, got {got}")
            }
            PredictError::ModelUnavailable(domain) => {
                write!(f, "no model is loaded for the {domain} domain")
            }
            PredictError::DimensionMismatch { expected, got } => {
                write!(
                    f,
                    "internal error: model expects {expected} features, \
                     vector has {got}"
                )
            }
        }
    }
}

impl std::error::Error for PredictError {}

impl PredictError {
    /// True for the errors caused by user input (as opposed to
    /// startup failures or internal defects). Only these collapse
    /// into the generic validation message at the boundary.
    pub fn is_user_input_error(&self) -> bool {
        matches!(
            self,
            PredictError::InvalidInput | PredictError::WrongFieldCount { .. }
        )
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_input_errors_are_flagged() {
        assert!(PredictError::InvalidInput.is_user_input_error());
        assert!(PredictError::WrongFieldCount { expected: 13, got: 12 }
            .is_user_input_error());
        assert!(!PredictError::ModelUnavailable(Domain::Diabetes)
            .is_user_input_error());
        assert!(!PredictError::DimensionMismatch { expected: 8, got: 9 }
            .is_user_input_error());
    }

    #[test]
    fn test_display_carries_no_field_detail_for_invalid_input() {
        // The collapsed message must not name fields or values
        let msg = PredictError::InvalidInput.to_string();
        assert_eq!(msg, "one or more fields are not valid numbers");
    }
}
