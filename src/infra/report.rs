// ============================================================
// Layer 6 - Batch Report
// ============================================================
// Records what a preparation run produced: the config it ran
// with and one row per batch.
//
// Example JSON output:
//   {
//     "config": { "batch_size": 32, "shuffle": true, ... },
//     "batches": [
//       { "index": 0, "size": 32, "max_source_len": 41, ... },
//       ...
//     ]
//   }

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::application::prepare_use_case::PrepareConfig;

/// One row of the report, describing a single padded batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Position of the batch in the iteration order (starts at 0)
    pub index: usize,

    /// Number of examples in the batch
    pub size: usize,

    /// Padded width of the source block (the longest source sentence)
    pub max_source_len: usize,

    /// Padded width of the target block, <s> and </s> included
    pub max_target_len: usize,

    /// Filler cells added to the source block
    pub source_pad: usize,

    /// Filler cells added to the target block
    pub target_pad: usize,
}

impl BatchSummary {
    /// Fraction of source cells that are padding, in [0.0, 1.0]
    pub fn source_pad_ratio(&self) -> f64 {
        let cells = self.size * self.max_source_len;
        if cells == 0 {
            return 0.0;
        }
        self.source_pad as f64 / cells as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub config:  PrepareConfig,
    pub batches: Vec<BatchSummary>,
}

impl BatchReport {
    pub fn new(config: PrepareConfig, batches: Vec<BatchSummary>) -> Self {
        Self { config, batches }
    }

    pub fn total_examples(&self) -> usize {
        self.batches.iter().map(|b| b.size).sum()
    }

    /// Write the report as pretty-printed JSON, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create '{}'", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Cannot write report to '{}'", path.display()))?;

        tracing::info!("Saved batch report to '{}'", path.display());
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read report '{}'", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Malformed report '{}'", path.display()))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn summary(size: usize, max_source_len: usize, source_pad: usize) -> BatchSummary {
        BatchSummary {
            index: 0,
            size,
            max_source_len,
            max_target_len: 0,
            source_pad,
            target_pad: 0,
        }
    }

    #[test]
    fn test_pad_ratio() {
        assert_eq!(summary(2, 4, 2).source_pad_ratio(), 0.25);
        // Empty batch must not divide by zero
        assert_eq!(summary(0, 0, 0).source_pad_ratio(), 0.0);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir    = tempfile::tempdir().unwrap();
        let path   = dir.path().join("runs/a/report.json");
        let report = BatchReport::new(PrepareConfig::default(), vec![summary(3, 5, 1)]);

        report.save(&path).unwrap();
        assert_eq!(BatchReport::load(&path).unwrap(), report);
    }
}
