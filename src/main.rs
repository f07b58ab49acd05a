use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use frame_bench::bench::{self, BenchConfig};

#[derive(Parser, Debug)]
#[command(name = "frame-bench")]
struct Args {
    /// Dataset sizes (row counts) to benchmark, in run order.
    #[arg(long, value_delimiter = ',', default_value = "10000,100000,1000000")]
    sizes: Vec<usize>,

    /// Report destination.
    #[arg(long, default_value = bench::DEFAULT_REPORT)]
    output: PathBuf,

    /// Directory for generated dataset files.
    #[arg(long, default_value = bench::DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Number of categorical labels to draw from.
    #[arg(long, default_value_t = bench::DEFAULT_CATEGORIES)]
    categories: usize,

    /// Generator seed; fixed by default so runs are reproducible.
    #[arg(long, default_value_t = bench::DEFAULT_SEED)]
    seed: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = BenchConfig {
        sizes: args.sizes,
        output_path: args.output,
        data_dir: args.data_dir,
        categories: args.categories,
        seed: args.seed,
    };

    let measurements = bench::harness::run(&config)?;
    println!(
        "Wrote {} measurements to {}",
        measurements.len(),
        config.output_path.display()
    );

    Ok(())
}
