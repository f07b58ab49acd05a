use std::fmt;
use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

pub mod harness;
pub mod memory;
pub mod report;
pub mod runner;

/// Row counts benchmarked when none are configured
pub const DEFAULT_SIZES: [usize; 3] = [10_000, 100_000, 1_000_000];

/// Rows pass the filter step when `value1` is strictly above this
pub const FILTER_THRESHOLD: f64 = 110.0;

/// Generator seed used unless overridden
pub const DEFAULT_SEED: u64 = 42;

/// Size of the categorical label set
pub const DEFAULT_CATEGORIES: usize = 10;

/// Default report destination
pub const DEFAULT_REPORT: &str = "benchmark_results.csv";

/// Default directory for generated dataset files
pub const DEFAULT_DATA_DIR: &str = "data";

/// Error type used across the crate
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("DataFrame error: {0}")]
    Frame(#[from] PolarsError),

    #[error("Memory probe error: {0}")]
    Memory(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// The four benchmarked operations, in their fixed execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Load the dataset file into a DataFrame
    Read,
    /// Order the table ascending by `value1`
    Sort,
    /// Keep rows whose `value1` is above the threshold
    Filter,
    /// Mean of `value2` per category label
    GroupBy,
}

impl Operation {
    /// Execution order, which is also the report row order per size.
    pub const ALL: [Operation; 4] = [
        Operation::Read,
        Operation::Sort,
        Operation::Filter,
        Operation::GroupBy,
    ];

    /// Name used in the report and on the console.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Read => "read",
            Operation::Sort => "sort",
            Operation::Filter => "filter",
            Operation::GroupBy => "groupby",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (size, operation, time, memory) observation.
///
/// `memory_mb` is resident-set growth since the baseline sampled right
/// before that size's read step. The read value covers materializing the
/// table; later operations report cumulative growth since the baseline,
/// not their own allocation.
#[derive(Debug, Clone)]
pub struct Measurement {
    pub size: usize,
    pub operation: Operation,
    pub time_secs: f64,
    pub memory_mb: f64,
}

/// Benchmark run configuration.
///
/// Defaults reproduce the stock run: three sizes, ten labels, seed 42,
/// report at `benchmark_results.csv`, datasets under `data/`.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Row counts to benchmark, in run order
    pub sizes: Vec<usize>,
    /// Report destination
    pub output_path: PathBuf,
    /// Directory for generated dataset files
    pub data_dir: PathBuf,
    /// Number of categorical labels (`cat_0` .. `cat_{n-1}`)
    pub categories: usize,
    /// Generator seed
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            output_path: PathBuf::from(DEFAULT_REPORT),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            categories: DEFAULT_CATEGORIES,
            seed: DEFAULT_SEED,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.sizes.is_empty() {
            return Err(BenchError::Config("no dataset sizes given".to_string()));
        }
        if self.categories == 0 {
            return Err(BenchError::Config(
                "category count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Dataset filename for a row count, `test_data_{size}.csv`.
pub fn dataset_filename(size: usize) -> String {
    format!("test_data_{size}.csv")
}
