use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use ferrous_split::{defaults, split_paired, SplitOpt};

#[derive(Parser)]
#[command(name = "ferrous-split")]
#[command(
    about = "Shuffle a pair of FASTQ files with one shared permutation and split them into N parts",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// First-of-pair FASTQ file
    #[arg(value_name = "READS_1.FQ")]
    reads1: PathBuf,

    /// Second-of-pair FASTQ file
    #[arg(value_name = "READS_2.FQ")]
    reads2: PathBuf,

    /// Output prefix; writes <PREFIX>_part<N>_1.<EXT> and <PREFIX>_part<N>_2.<EXT>
    #[arg(value_name = "PREFIX")]
    prefix: PathBuf,

    /// Number of output parts (1 to number of read pairs)
    #[arg(value_name = "PARTS")]
    parts: usize,

    /// Seed for the shuffle; identical seed and inputs give identical outputs
    #[arg(short = 's', long, value_name = "INT")]
    seed: Option<u64>,

    /// Reject any input line longer than INT bytes
    #[arg(short = 'L', long, value_name = "INT", default_value_t = defaults::MAX_LINE_LENGTH)]
    max_line_length: usize,

    /// Output file extension
    #[arg(short = 'x', long, value_name = "EXT", default_value = defaults::OUTPUT_EXTENSION)]
    extension: String,

    /// Verbose level: 1=error, 2=warning, 3=message, 4+=debugging
    #[arg(short = 'v', long, value_name = "INT", default_value_t = defaults::VERBOSITY)]
    verbosity: i32,
}

fn main() {
    let cli = Cli::parse();

    // Map verbosity (1=error, 2=warning, 3=message, 4=debug, 5+=trace)
    // to Rust log levels. Anything at or below 1 still reports errors.
    let log_level = match cli.verbosity {
        v if v <= 1 => log::LevelFilter::Error,
        2 => log::LevelFilter::Warn,
        3 => log::LevelFilter::Info,
        4 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(e) = run(cli) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut opt = SplitOpt::new(cli.reads1, cli.reads2, cli.prefix, cli.parts);
    opt.seed = cli.seed;
    opt.max_line_len = cli.max_line_length;
    opt.extension = cli.extension;

    log::info!(
        "Reads: {} + {}",
        opt.reads1.display(),
        opt.reads2.display()
    );
    if let Some(seed) = opt.seed {
        log::info!("Shuffle seed: {}", seed);
    }

    let summary = split_paired(&opt).context("split failed")?;

    let part_word = if summary.partitions.len() == 1 {
        "part"
    } else {
        "parts"
    };
    log::info!(
        "Wrote {} read pairs in {} {}",
        summary.records,
        summary.partitions.len(),
        part_word
    );
    Ok(())
}
