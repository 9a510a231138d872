// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// one specific goal: turning a raw submission into an outcome
// sentence.
//
// Rules for this layer:
//   - No model math or artifact-format code here
//   - No UI or printing here (that's Layer 1)
//   - No direct file access (that's Layer 6)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The prediction workflow: adapt → infer → present
pub mod predict_use_case;
