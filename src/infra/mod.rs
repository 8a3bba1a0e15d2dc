// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// Cross-cutting persistence that does not belong to the data
// pipeline itself:
//
//   report.rs - Batch reports
//               Serialises the preparation config plus one
//               summary row per batch to JSON, so a run can be
//               inspected or compared against a later one.
//
// Reference: Rust Book §9 (Error Handling with anyhow)

/// JSON batch report writer and reader
pub mod report;
