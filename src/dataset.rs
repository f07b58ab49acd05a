//! Synthetic dataset generation.
//!
//! Writes the CSV files the benchmark reads back: sequential ids, a
//! categorical label, a normal-distributed `value1` and a uniform `value2`.
//! Generation is seeded, so a given spec always produces byte-identical
//! output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::bench::{BenchError, DEFAULT_CATEGORIES, DEFAULT_SEED};

/// Header row of generated dataset files
pub const HEADER: &str = "id,category,value1,value2";

pub const COL_ID: &str = "id";
pub const COL_CATEGORY: &str = "category";
pub const COL_VALUE1: &str = "value1";
pub const COL_VALUE2: &str = "value2";

const VALUE1_MEAN: f64 = 100.0;
const VALUE1_STD_DEV: f64 = 20.0;
/// Exclusive upper bound of `value2`
const VALUE2_MAX: f64 = 1000.0;

/// Shape of one generated dataset.
#[derive(Debug, Clone)]
pub struct DatasetSpec {
    pub rows: usize,
    pub seed: u64,
    pub categories: usize,
}

impl DatasetSpec {
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            seed: DEFAULT_SEED,
            categories: DEFAULT_CATEGORIES,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_categories(mut self, categories: usize) -> Self {
        self.categories = categories;
        self
    }

    /// Label set rows draw from: `cat_0` .. `cat_{n-1}`.
    pub fn labels(&self) -> Vec<String> {
        (0..self.categories).map(|i| format!("cat_{i}")).collect()
    }
}

/// Write the dataset described by `spec` to `path`, replacing any existing
/// file. Rows are `id,category,value1,value2` with ids running 0..rows.
pub fn write_csv(spec: &DatasetSpec, path: &Path) -> Result<(), BenchError> {
    if spec.categories == 0 {
        return Err(BenchError::Config(
            "category count must be at least 1".to_string(),
        ));
    }

    let normal = Normal::new(VALUE1_MEAN, VALUE1_STD_DEV)
        .map_err(|e| BenchError::Config(format!("bad value1 distribution: {e}")))?;
    let labels = spec.labels();
    let mut rng = StdRng::seed_from_u64(spec.seed);

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{HEADER}")?;
    for id in 0..spec.rows {
        let label = &labels[rng.random_range(0..labels.len())];
        let value1 = normal.sample(&mut rng);
        let value2 = rng.random_range(0.0..VALUE2_MAX);
        writeln!(writer, "{id},{label},{value1},{value2}")?;
    }
    writer.flush()?;

    Ok(())
}
