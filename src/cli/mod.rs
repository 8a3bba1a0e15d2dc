// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands off to the use cases in
// Layer 2. This is the only layer that prints to stdout.
//
//   1. `batches` - read, pair, batch and pad a parallel corpus
//   2. `stats`   - length statistics for one corpus file

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{BatchesArgs, Commands, StatsArgs};

#[derive(Parser, Debug)]
#[command(
    name = "nmt-prep",
    version,
    about = "Read, batch and pad parallel corpora for seq2seq training."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Batches(args) => run_batches(args),
            Commands::Stats(args)   => run_stats(args),
        }
    }
}

fn run_batches(args: BatchesArgs) -> Result<()> {
    use nmt_prep::application::prepare_use_case::PrepareUseCase;

    let report = PrepareUseCase::new(args.into()).execute()?;

    for b in &report.batches {
        println!(
            "batch {:>5}  size={:<4} src_len={:<4} tgt_len={:<4} src_pad={:.1}%",
            b.index,
            b.size,
            b.max_source_len,
            b.max_target_len,
            b.source_pad_ratio() * 100.0,
        );
    }
    println!(
        "\n{} batches, {} examples",
        report.batches.len(),
        report.total_examples()
    );
    Ok(())
}

fn run_stats(args: StatsArgs) -> Result<()> {
    use nmt_prep::application::stats_use_case::StatsUseCase;

    let stats = StatsUseCase::new(args.file, args.side).execute()?;
    println!(
        "{} sentences ({}), {} tokens, length min={} max={} mean={:.2}",
        stats.sentences, stats.side, stats.tokens, stats.min_len, stats.max_len, stats.mean_len,
    );
    Ok(())
}
