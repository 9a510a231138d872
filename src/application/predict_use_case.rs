// ============================================================
// Layer 2 — Predict Use Case
// ============================================================
// One submission, start to finish:
//   1. Look up the domain's model in the store
//   2. Adapt raw text values into a feature vector
//   3. Run single-sample inference
//   4. Map the label to the domain's outcome sentence
//
// Each call is an independent, stateless request/compute/
// respond cycle. The only state the use case carries between
// calls is the read-only model store it was constructed with.

use anyhow::Result;

use crate::data::adapter::FeatureAdapter;
use crate::domain::feature_spec::Domain;
use crate::domain::traits::Predictor;
use crate::infra::model_store::ModelStore;

pub struct PredictUseCase {
    store: ModelStore,
}

impl PredictUseCase {
    /// Build the use case by loading every model artifact from
    /// the models directory. Startup failures surface here, not
    /// at prediction time.
    pub fn new(models_dir: impl AsRef<std::path::Path>) -> Result<Self> {
        let store = ModelStore::load(models_dir)?;
        Ok(Self { store })
    }

    /// Wrap an already-loaded store (used by tests).
    pub fn with_store(store: ModelStore) -> Self {
        Self { store }
    }

    /// Run one prediction for a domain from raw text values in
    /// field order; returns the outcome sentence.
    ///
    /// Validation errors are returned before any inference is
    /// attempted — a rejected batch never touches the model.
    pub fn predict(&self, domain: Domain, raw_values: &[String]) -> Result<String> {
        // Model first: an unavailable domain is reported even
        // for a malformed submission, since nothing could be
        // served for it either way
        let model = self.store.model(domain)?;

        let adapter = FeatureAdapter::for_domain(domain);
        let features = adapter.convert(raw_values)?;

        let label = model.predict(&features)?;

        if let Some(p) = model.probability(&features)? {
            tracing::debug!("{domain}: P(positive) = {p:.4}");
        }
        tracing::info!("{domain}: class {}", label.class_index());

        Ok(domain.outcome_text(label).to_string())
    }

    /// Domains that are currently servable.
    pub fn available_domains(&self) -> Vec<Domain> {
        self.store.available()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::PredictError;
    use crate::ml::model::{LinearClassifier, ModelKind};
    use std::path::Path;

    /// Build a models directory with a valid artifact for every
    /// domain. Weights are arbitrary but fixed, so outcomes are
    /// stable within a test.
    fn write_all_artifacts(dir: &Path) {
        for domain in Domain::ALL {
            let n = domain.spec().len();
            let model = LinearClassifier {
                algorithm:    ModelKind::LogisticRegression,
                n_features:   n,
                scaler_mean:  vec![0.0; n],
                scaler_scale: vec![1.0; n],
                coefficients: vec![0.05; n],
                intercept:    -0.3,
            };
            std::fs::write(
                dir.join(domain.artifact_name()),
                serde_json::to_string(&model).unwrap(),
            )
            .unwrap();
        }
    }

    fn raw(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    const DIABETES_INPUT: [&str; 8] =
        ["2", "120", "70", "30", "80", "25.0", "0.5", "35"];

    #[test]
    fn test_valid_submission_yields_exactly_one_outcome_string() {
        let dir = tempfile::tempdir().unwrap();
        write_all_artifacts(dir.path());
        let use_case = PredictUseCase::new(dir.path()).unwrap();

        let outcome = use_case
            .predict(Domain::Diabetes, &raw(&DIABETES_INPUT))
            .unwrap();
        assert!(
            outcome == "The person is diabetic"
                || outcome == "The person is not diabetic",
            "unexpected outcome: {outcome}",
        );
    }

    #[test]
    fn test_heart_disease_valid_submission_yields_one_outcome_string() {
        let dir = tempfile::tempdir().unwrap();
        write_all_artifacts(dir.path());
        let use_case = PredictUseCase::new(dir.path()).unwrap();

        let input = raw(&[
            "63", "1", "3", "145", "233", "1", "0", "150", "0", "2.3",
            "0", "0", "1",
        ]);
        let outcome = use_case.predict(Domain::HeartDisease, &input).unwrap();
        assert!(
            outcome == "The person has heart disease"
                || outcome == "The person does not have heart disease",
            "unexpected outcome: {outcome}",
        );
    }

    #[test]
    fn test_parkinsons_valid_submission_yields_one_outcome_string() {
        let dir = tempfile::tempdir().unwrap();
        write_all_artifacts(dir.path());
        let use_case = PredictUseCase::new(dir.path()).unwrap();

        let input = raw(&[
            "119.992", "157.302", "74.997", "0.00784", "0.00007", "0.0037",
            "0.00554", "0.01109", "0.04374", "0.426", "0.02182", "0.0313",
            "0.02971", "0.06545", "0.02211", "21.033", "0.414783", "0.815285",
            "-4.813031", "0.266482", "2.301442", "0.284654",
        ]);
        let outcome = use_case.predict(Domain::Parkinsons, &input).unwrap();
        assert!(
            outcome == "The person has Parkinson's disease"
                || outcome == "The person does not have Parkinson's disease",
            "unexpected outcome: {outcome}",
        );
    }

    #[test]
    fn test_repeated_submission_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        write_all_artifacts(dir.path());
        let use_case = PredictUseCase::new(dir.path()).unwrap();

        let input = raw(&DIABETES_INPUT);
        let first  = use_case.predict(Domain::Diabetes, &input).unwrap();
        let second = use_case.predict(Domain::Diabetes, &input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_field_stops_before_inference() {
        let dir = tempfile::tempdir().unwrap();
        write_all_artifacts(dir.path());
        let use_case = PredictUseCase::new(dir.path()).unwrap();

        let mut input = raw(&DIABETES_INPUT);
        input[1] = "not-a-number".to_string();

        let err = use_case.predict(Domain::Diabetes, &input).unwrap_err();
        assert_eq!(
            err.downcast::<PredictError>().unwrap(),
            PredictError::InvalidInput,
        );
    }

    #[test]
    fn test_short_submission_is_a_shape_error() {
        let dir = tempfile::tempdir().unwrap();
        write_all_artifacts(dir.path());
        let use_case = PredictUseCase::new(dir.path()).unwrap();

        // 12 of the 13 heart disease fields
        let input = raw(&[
            "63", "1", "3", "145", "233", "1", "0", "150", "0", "2.3", "0", "0",
        ]);
        let err = use_case.predict(Domain::HeartDisease, &input).unwrap_err();
        assert_eq!(
            err.downcast::<PredictError>().unwrap(),
            PredictError::WrongFieldCount { expected: 13, got: 12 },
        );
    }

    #[test]
    fn test_one_failed_domain_leaves_the_others_usable() {
        let dir = tempfile::tempdir().unwrap();
        write_all_artifacts(dir.path());
        std::fs::remove_file(
            dir.path().join(Domain::HeartDisease.artifact_name()),
        )
        .unwrap();

        let use_case = PredictUseCase::new(dir.path()).unwrap();
        assert_eq!(
            use_case.available_domains(),
            vec![Domain::Diabetes, Domain::Parkinsons],
        );

        // Diabetes still serves
        assert!(use_case
            .predict(Domain::Diabetes, &raw(&DIABETES_INPUT))
            .is_ok());

        // Heart disease reports ModelUnavailable
        let input = raw(&[
            "63", "1", "3", "145", "233", "1", "0", "150", "0", "2.3",
            "0", "0", "1",
        ]);
        let err = use_case.predict(Domain::HeartDisease, &input).unwrap_err();
        assert_eq!(
            err.downcast::<PredictError>().unwrap(),
            PredictError::ModelUnavailable(Domain::HeartDisease),
        );
    }

    #[test]
    fn test_decision_boundary_separates_submissions() {
        // With all-0.05 coefficients, identity scaler and
        // intercept -0.3, large positive inputs cross the
        // boundary and all-zero inputs do not.
        let dir = tempfile::tempdir().unwrap();
        write_all_artifacts(dir.path());
        let use_case = PredictUseCase::new(dir.path()).unwrap();

        let zeros = raw(&["0", "0", "0", "0", "0", "0", "0", "0"]);
        assert_eq!(
            use_case.predict(Domain::Diabetes, &zeros).unwrap(),
            "The person is not diabetic",
        );

        let large = raw(&["9", "200", "90", "40", "300", "40", "2", "60"]);
        assert_eq!(
            use_case.predict(Domain::Diabetes, &large).unwrap(),
            "The person is diabetic",
        );
    }
}
