// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// Workflows built out of the data layer:
//
//   prepare_use_case  → read a parallel corpus, batch it, pad
//                       each batch, summarise (and optionally
//                       save a JSON report)
//   stats_use_case    → length statistics for a single corpus
//
// No printing here; the CLI layer owns the terminal.

// Batch preparation over a parallel corpus
pub mod prepare_use_case;

// Sentence length statistics
pub mod stats_use_case;
