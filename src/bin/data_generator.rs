use std::path::PathBuf;

use clap::Parser;
use frame_bench::bench::{DEFAULT_CATEGORIES, DEFAULT_DATA_DIR, DEFAULT_SEED, dataset_filename};
use frame_bench::dataset::{DatasetSpec, write_csv};

/// Write one synthetic dataset file without running the benchmark.
#[derive(Parser, Debug)]
#[command(name = "data_generator")]
struct Args {
    /// Number of rows to generate.
    #[arg(long, default_value_t = 1_000_000)]
    rows: usize,

    /// Destination path; defaults to data/test_data_{rows}.csv.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Generator seed.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Number of categorical labels.
    #[arg(long, default_value_t = DEFAULT_CATEGORIES)]
    categories: usize,
}

fn main() {
    let args = Args::parse();

    let path = args
        .out
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR).join(dataset_filename(args.rows)));
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).unwrap();
    }

    let spec = DatasetSpec::new(args.rows)
        .with_seed(args.seed)
        .with_categories(args.categories);
    write_csv(&spec, &path).unwrap();

    println!("Sample CSV generated: {}", path.display());
}
