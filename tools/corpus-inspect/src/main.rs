//! Corpus Inspection Tool
//!
//! Loads a parallel dataset from a vocabulary file and four corpus files,
//! then reports vocabulary size, partition sizes, and batch counts for
//! both iteration modes.

use anyhow::{Context, Result};
use clap::Parser;
use parabatch_core::{DatasetConfig, ParallelDataset, Split};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// CLI arguments
#[derive(Parser)]
#[command(name = "corpus-inspect")]
#[command(about = "Inspect a parallel corpus dataset and its batch layout")]
#[command(version)]
struct Cli {
    /// Vocabulary file (one token per line, must contain <unk>)
    vocab: PathBuf,

    /// Domain-1 source corpus
    d1_source: PathBuf,

    /// Domain-1 target corpus
    d1_target: PathBuf,

    /// Domain-2 source corpus
    d2_source: PathBuf,

    /// Domain-2 target corpus
    d2_target: PathBuf,

    /// Examples per batch
    #[arg(short, long, default_value_t = 64)]
    batch_size: usize,

    /// Fixed sequence width after padding/truncation
    #[arg(short, long, default_value_t = 50)]
    max_seq_len: usize,

    /// Emit the trailing partial batch instead of dropping it
    #[arg(long)]
    emit_trailing: bool,

    /// Seed for mixed-mode domain interleaving
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

/// Batch layout of one partition.
#[derive(Debug, Serialize)]
struct SplitReport {
    examples: usize,
    paired_batches: usize,
    mixed_batches: usize,
}

/// Full dataset report.
#[derive(Debug, Serialize)]
struct Report {
    vocab_size: usize,
    examples: usize,
    batch_size: usize,
    max_seq_len: usize,
    train: SplitReport,
    validation: SplitReport,
    test: SplitReport,
}

fn inspect_split(dataset: &ParallelDataset, split: Split) -> SplitReport {
    SplitReport {
        examples: dataset.partition(split).len(),
        paired_batches: dataset.paired_batches(split).count(),
        mixed_batches: dataset.mixed_batches(split).count(),
    }
}

fn print_split(name: &str, report: &SplitReport) {
    println!(
        "  {name:<12} {:>8} examples  {:>6} paired batches  {:>6} mixed batches",
        report.examples, report.paired_batches, report.mixed_batches
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = DatasetConfig::new()
        .with_batch_size(cli.batch_size)
        .with_max_seq_len(cli.max_seq_len)
        .with_strict_boundary(!cli.emit_trailing)
        .with_mix_seed(cli.seed);

    info!("loading parallel dataset...");
    let dataset = ParallelDataset::from_files(
        &cli.vocab,
        &cli.d1_source,
        &cli.d1_target,
        &cli.d2_source,
        &cli.d2_target,
        config,
    )
    .context("failed to load dataset")?;

    let report = Report {
        vocab_size: dataset.vocab_size(),
        examples: dataset.len(),
        batch_size: cli.batch_size,
        max_seq_len: cli.max_seq_len,
        train: inspect_split(&dataset, Split::Train),
        validation: inspect_split(&dataset, Split::Validation),
        test: inspect_split(&dataset, Split::Test),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "vocabulary: {} entries, corpus: {} example pairs",
            report.vocab_size, report.examples
        );
        println!(
            "batch size {}, sequence width {}, trailing batches {}",
            report.batch_size,
            report.max_seq_len,
            if cli.emit_trailing { "emitted" } else { "dropped" }
        );
        print_split("train", &report.train);
        print_split("validation", &report.validation);
        print_split("test", &report.test);
    }

    Ok(())
}
