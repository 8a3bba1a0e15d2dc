// ============================================================
// Layer 4 - Data Pipeline
// ============================================================
// Everything between a plain text corpus on disk and a padded,
// length-sorted mini-batch.
//
// The pipeline flows in this order:
//
//   corpus.src / corpus.tgt
//       │
//       ▼
//   reader     → one tokenized sentence per line (<s> .. </s> on target)
//       │
//       ▼
//   pair       → (source, target) examples, aligned by line number
//       │
//       ▼
//   batcher    → shuffled, chunked, sorted by source length
//       │
//       ▼
//   padder     → every sentence in a batch padded to the longest
//
// Vocabulary lookup (words → ids) happens outside this crate;
// batcher and padder are generic over the token type.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads line-delimited corpora into tokenized sentences
pub mod reader;

/// Produces shuffled, length-sorted mini-batches
pub mod batcher;

/// Pads sentences to a common length
pub mod padder;
