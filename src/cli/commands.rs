// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `batches` and `stats`, and all
// of their flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use nmt_prep::application::prepare_use_case::PrepareConfig;
use nmt_prep::Side;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Batch and pad a parallel corpus, printing one line per batch
    Batches(BatchesArgs),

    /// Print sentence length statistics for a single corpus file
    Stats(StatsArgs),
}

#[derive(Args, Debug)]
pub struct BatchesArgs {
    /// Source-language corpus, one sentence per line
    #[arg(long)]
    pub src: String,

    /// Target-language corpus, line-aligned with --src
    #[arg(long)]
    pub tgt: String,

    /// Number of examples per batch
    #[arg(long, default_value_t = 32)]
    pub batch_size: usize,

    /// Keep the corpus order instead of shuffling
    #[arg(long)]
    pub no_shuffle: bool,

    /// Seed for the shuffle, for reproducible batches
    #[arg(long)]
    pub seed: Option<u64>,

    /// Filler token appended to shorter sentences
    #[arg(long, default_value = "<pad>")]
    pub pad_token: String,

    /// Write a JSON report of the batches to this path
    #[arg(long)]
    pub report: Option<String>,
}

/// The application layer never sees clap types
impl From<BatchesArgs> for PrepareConfig {
    fn from(a: BatchesArgs) -> Self {
        PrepareConfig {
            src_path:    a.src,
            tgt_path:    a.tgt,
            batch_size:  a.batch_size,
            shuffle:     !a.no_shuffle,
            seed:        a.seed,
            pad_token:   a.pad_token,
            report_path: a.report,
        }
    }
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Corpus file to inspect
    #[arg(long)]
    pub file: String,

    /// Which side the file holds: src or tgt (tgt adds <s> and </s>)
    #[arg(long, default_value = "src")]
    pub side: Side,
}
