// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// This is the heart of the application — pure Rust structs,
// enums, and traits that define the core concepts of the system.
//
// Rules for this layer:
//   - NO clap types allowed here
//   - NO file I/O
//   - NO model-format knowledge (that's Layer 5)
//   - Only plain Rust structs, enums, and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no model artifacts needed)
//   - Easy to understand (no framework noise)
//   - Easy to swap implementations (just implement the trait)
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// The three prediction domains, their feature specs, and the
// feature vector type
pub mod feature_spec;

// The binary prediction label and the outcome-string presenter
pub mod prediction;

// The error taxonomy for validation, store, and inference failures
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
