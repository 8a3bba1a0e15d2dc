// ============================================================
// Layer 3 - Core Traits
// ============================================================
// The application layer asks for sentences through this trait
// rather than calling the text reader directly, so an in-memory
// corpus (tests) and a file-backed corpus look the same to it.
//
// Implementations:
//   - CorpusReader      -> one plain text file, one sentence per line
//   - Vec<Sentence<..>> -> sentences already in memory

use crate::domain::example::Sentence;
use crate::error::Result;

// ─── SentenceSource ───────────────────────────────────────────────────────────
/// Anything that can produce an ordered list of tokenized sentences.
pub trait SentenceSource {
    /// Load every sentence, preserving source order.
    fn load_sentences(&self) -> Result<Vec<Sentence<String>>>;
}

impl SentenceSource for Vec<Sentence<String>> {
    fn load_sentences(&self) -> Result<Vec<Sentence<String>>> {
        Ok(self.clone())
    }
}
