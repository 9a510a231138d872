// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles the one cross-cutting concern this system has:
//
//   model_store.rs — Model artifact loading and the process-
//                    wide read-only model registry. Loads all
//                    three domain artifacts once at startup and
//                    hands out shared-read handles for the rest
//                    of the process lifetime. No reload, no
//                    hot-swap.
//
// Why is this a separate layer?
//   Artifact location and load-failure policy are deployment
//   concerns, not prediction concerns. Keeping them here:
//   - Keeps the ML layer free of directory knowledge
//   - Makes it easy to swap implementations
//     (e.g. swap local files for S3 artifact storage)
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Model artifact loading and the read-only model registry
pub mod model_store;
