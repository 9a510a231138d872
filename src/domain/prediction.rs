// ============================================================
// Layer 3 — Prediction Label and Result Presenter
// ============================================================
// A model emits exactly one of two classes per submission.
// Rather than carrying the raw 0/1 around as an integer (and
// having to handle "what if it's 7?" everywhere), the label is
// a two-variant enum: an out-of-range class is unrepresentable
// and the presenter below is total with no default arm.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use crate::domain::feature_spec::Domain;

/// The binary class a model assigns to one feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionLabel {
    /// Class 0 — the condition is absent
    Negative,

    /// Class 1 — the condition is present
    Positive,
}

impl PredictionLabel {
    /// The class index as the underlying datasets encode it.
    pub fn class_index(&self) -> u8 {
        match self {
            PredictionLabel::Negative => 0,
            PredictionLabel::Positive => 1,
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, PredictionLabel::Positive)
    }
}

impl Domain {
    /// Map a prediction label to the fixed outcome sentence for
    /// this domain. Exactly two strings exist per domain; the
    /// match is total so no other output is possible.
    pub fn outcome_text(&self, label: PredictionLabel) -> &'static str {
        match (self, label) {
            (Domain::Diabetes, PredictionLabel::Positive) =>
                "The person is diabetic",
            (Domain::Diabetes, PredictionLabel::Negative) =>
                "The person is not diabetic",
            (Domain::HeartDisease, PredictionLabel::Positive) =>
                "The person has heart disease",
            (Domain::HeartDisease, PredictionLabel::Negative) =>
                "The person does not have heart disease",
            (Domain::Parkinsons, PredictionLabel::Positive) =>
                "The person has Parkinson's disease",
            (Domain::Parkinsons, PredictionLabel::Negative) =>
                "The person does not have Parkinson's disease",
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_index_round_trip() {
        assert_eq!(PredictionLabel::Negative.class_index(), 0);
        assert_eq!(PredictionLabel::Positive.class_index(), 1);
        assert!(PredictionLabel::Positive.is_positive());
        assert!(!PredictionLabel::Negative.is_positive());
    }

    #[test]
    fn test_each_domain_has_exactly_two_distinct_outcomes() {
        for domain in Domain::ALL {
            let pos = domain.outcome_text(PredictionLabel::Positive);
            let neg = domain.outcome_text(PredictionLabel::Negative);
            assert_ne!(pos, neg, "outcomes must differ for {domain}");
        }
    }

    #[test]
    fn test_outcome_strings_match_the_form_text() {
        assert_eq!(
            Domain::Diabetes.outcome_text(PredictionLabel::Positive),
            "The person is diabetic",
        );
        assert_eq!(
            Domain::HeartDisease.outcome_text(PredictionLabel::Negative),
            "The person does not have heart disease",
        );
        assert_eq!(
            Domain::Parkinsons.outcome_text(PredictionLabel::Positive),
            "The person has Parkinson's disease",
        );
    }
}
