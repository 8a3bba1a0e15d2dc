// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain structs, enums and traits describing parallel text:
// sentences, source/target sides and the (source, target)
// example pairs that get batched for training.
//
// Rules for this layer:
//   - NO file I/O
//   - NO randomness
//   - Only plain Rust types and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Sentences, sides and example pairs
pub mod example;

// Abstractions the data layer implements
pub mod traits;
