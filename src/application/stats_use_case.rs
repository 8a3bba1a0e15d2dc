// ============================================================
// Layer 2 - StatsUseCase
// ============================================================
// Reads one corpus and reports how long its sentences are.
// Handy for choosing a batch size before a training run.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::reader::CorpusReader;
use crate::domain::example::{Sentence, Side};
use crate::domain::traits::SentenceSource;

/// Sentence length statistics for one side of a corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub side:      Side,
    pub sentences: usize,
    pub tokens:    usize,
    pub min_len:   usize,
    pub max_len:   usize,
    pub mean_len:  f64,
}

impl CorpusStats {
    pub fn from_sentences<T>(side: Side, sents: &[Sentence<T>]) -> Self {
        let lengths = sents.iter().map(Vec::len);
        let tokens: usize = lengths.clone().sum();

        Self {
            side,
            sentences: sents.len(),
            tokens,
            min_len:   lengths.clone().min().unwrap_or(0),
            max_len:   lengths.max().unwrap_or(0),
            mean_len:  tokens as f64 / sents.len().max(1) as f64,
        }
    }
}

pub struct StatsUseCase {
    reader: CorpusReader,
}

impl StatsUseCase {
    pub fn new(path: impl Into<PathBuf>, side: Side) -> Self {
        Self { reader: CorpusReader::new(path, side) }
    }

    pub fn execute(&self) -> Result<CorpusStats> {
        let sents = self
            .reader
            .load_sentences()
            .with_context(|| format!("Failed to load '{}'", self.reader.path().display()))?;

        let stats = CorpusStats::from_sentences(self.reader.side(), &sents);
        tracing::info!(
            "{} corpus: {} sentences, {} tokens",
            stats.side,
            stats.sentences,
            stats.tokens
        );
        Ok(stats)
    }
}
