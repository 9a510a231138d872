// ============================================================
// Layer 6 — Model Store
// ============================================================
// Loads the three serialized model artifacts from the models
// directory once at startup, then acts as an immutable registry
// mapping domain → model for the rest of the process lifetime.
//
// Failure policy (per-domain isolation):
//   A missing or corrupted artifact disables ONLY its own
//   domain — the failure is logged as a warning at load time
//   and later predictions for that domain get a clear
//   ModelUnavailable error. The other domains keep working.
//   Only when no artifact at all can be loaded does the store
//   itself fail, because the process could not serve anything.
//
// Expected directory layout:
//   saved_models/
//     diabetes_model.json
//     heart_disease_model.json
//     parkinsons_model.json
//
// Read-only after load — no locking discipline is needed even
// if requests were ever handled concurrently.
//
// Reference: Rust Book §8 (HashMap)
//            Rust Book §9 (Error Handling)

use anyhow::{bail, Result};
use std::collections::HashMap;
use std::path::Path;

use crate::domain::error::PredictError;
use crate::domain::feature_spec::Domain;
use crate::ml::model::LinearClassifier;

/// The process-wide, read-only registry of loaded models.
pub struct ModelStore {
    /// One loaded model per successfully loaded domain
    models: HashMap<Domain, LinearClassifier>,
}

impl ModelStore {
    /// Load every domain's artifact from the given directory.
    ///
    /// Domains whose artifact fails to load are disabled with a
    /// warning; the store only errors when nothing loaded.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut models = HashMap::new();

        for domain in Domain::ALL {
            let path = dir.join(domain.artifact_name());
            match LinearClassifier::load(&path) {
                Ok(model) => {
                    // Artifact dimensionality must agree with the
                    // domain's feature spec — a mismatch means the
                    // artifact belongs to a different model version
                    let expected = domain.spec().len();
                    if model.n_features != expected {
                        tracing::warn!(
                            "Disabling {domain}: artifact expects {} features, \
                             spec has {expected}",
                            model.n_features,
                        );
                        continue;
                    }
                    tracing::info!(
                        "Loaded {domain} model ({} features)", model.n_features,
                    );
                    models.insert(domain, model);
                }
                Err(e) => {
                    tracing::warn!("Disabling {domain}: {e:#}");
                }
            }
        }

        if models.is_empty() {
            bail!(
                "No model artifacts could be loaded from '{}'",
                dir.display(),
            );
        }

        Ok(Self { models })
    }

    /// Shared-read handle to a domain's model, or
    /// ModelUnavailable if its artifact did not load.
    pub fn model(&self, domain: Domain) -> Result<&LinearClassifier> {
        self.models
            .get(&domain)
            .ok_or_else(|| PredictError::ModelUnavailable(domain).into())
    }

    /// Domains that loaded successfully, in menu order.
    pub fn available(&self) -> Vec<Domain> {
        Domain::ALL
            .into_iter()
            .filter(|d| self.models.contains_key(d))
            .collect()
    }
}
