// ============================================================
// Layer 2 - PrepareUseCase
// ============================================================
// Runs the full data preparation pipeline in order:
//
//   Step 1: Read source corpus             (Layer 4 - data)
//   Step 2: Read target corpus             (Layer 4 - data)
//   Step 3: Pair sentences by line number  (Layer 4 - data)
//   Step 4: Build the random source        (seeded or fresh)
//   Step 5: Iterate and pad batches        (Layer 4 - data)
//   Step 6: Save the batch report          (Layer 6 - infra)

use anyhow::{Context, Result};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::data::{
    batcher::batch_iter,
    reader::{pair_corpora, CorpusReader},
};
use crate::domain::example::Side;
use crate::domain::traits::SentenceSource;
use crate::infra::report::{BatchReport, BatchSummary};

// ─── Preparation Configuration ───────────────────────────────────────────────
// Everything a batching run depends on. Serialisable so it can
// be written into the report next to the batches it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepareConfig {
    pub src_path:    String,
    pub tgt_path:    String,
    pub batch_size:  usize,
    pub shuffle:     bool,
    /// Fixed seed for reproducible shuffles; None draws one from entropy
    pub seed:        Option<u64>,
    pub pad_token:   String,
    pub report_path: Option<String>,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            src_path:    "data/train.src".to_string(),
            tgt_path:    "data/train.tgt".to_string(),
            batch_size:  32,
            shuffle:     true,
            seed:        None,
            pad_token:   "<pad>".to_string(),
            report_path: None,
        }
    }
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Execute the pipeline over the corpus files named in the config
    pub fn execute(&self) -> Result<BatchReport> {
        let cfg = &self.config;

        tracing::info!("Reading source corpus '{}'", cfg.src_path);
        let src = CorpusReader::new(&cfg.src_path, Side::Source);

        tracing::info!("Reading target corpus '{}'", cfg.tgt_path);
        let tgt = CorpusReader::new(&cfg.tgt_path, Side::Target);

        self.execute_with(&src, &tgt)
    }

    /// Execute the pipeline over any pair of sentence sources
    pub fn execute_with(
        &self,
        src: &dyn SentenceSource,
        tgt: &dyn SentenceSource,
    ) -> Result<BatchReport> {
        let cfg = &self.config;

        // ── Steps 1-3: Load and pair ──────────────────────────────────────────
        let src_sents = src.load_sentences().context("Failed to load source corpus")?;
        let tgt_sents = tgt.load_sentences().context("Failed to load target corpus")?;
        let examples  = pair_corpora(src_sents, tgt_sents)?;
        tracing::info!("Paired {} examples", examples.len());

        // ── Step 4: Random source ─────────────────────────────────────────────
        let mut rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };

        // ── Step 5: Batch and pad ─────────────────────────────────────────────
        let batches = batch_iter(&examples, cfg.batch_size, cfg.shuffle, &mut rng)
            .with_context(|| format!("Cannot batch with batch_size={}", cfg.batch_size))?;

        let mut summaries = Vec::with_capacity(batches.len());
        for (index, batch) in batches.enumerate() {
            let (src_padded, tgt_padded) =
                batch.padded(cfg.pad_token.clone(), cfg.pad_token.clone());

            let src_width = src_padded.first().map_or(0, Vec::len);
            let tgt_width = tgt_padded.first().map_or(0, Vec::len);
            let tgt_lengths: Vec<usize> = batch.targets.iter().map(Vec::len).collect();

            let summary = BatchSummary {
                index,
                size:           batch.len(),
                max_source_len: src_width,
                max_target_len: tgt_width,
                source_pad:     pad_cells(&batch.source_lengths(), src_width),
                target_pad:     pad_cells(&tgt_lengths, tgt_width),
            };
            tracing::debug!(
                "Batch {}: {} examples, src_len={}, tgt_len={}",
                summary.index,
                summary.size,
                summary.max_source_len,
                summary.max_target_len,
            );
            summaries.push(summary);
        }

        let report = BatchReport::new(cfg.clone(), summaries);
        tracing::info!(
            "Built {} batches covering {} examples",
            report.batches.len(),
            report.total_examples(),
        );

        // ── Step 6: Save report ───────────────────────────────────────────────
        if let Some(path) = &cfg.report_path {
            report.save(path)?;
        }

        Ok(report)
    }
}

/// Number of filler cells added when rows of these lengths are padded
/// to `width`. Worked out from lengths, since the pad token may also
/// appear in real text.
fn pad_cells(lengths: &[usize], width: usize) -> usize {
    lengths.iter().map(|&len| width.saturating_sub(len)).sum()
}
