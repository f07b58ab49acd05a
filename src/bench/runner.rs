//! The measured operations and the wrapper that observes them.
//!
//! Each operation is a named function from the loaded table to a derived
//! table. `run_file` executes the fixed read, sort, filter, groupby sequence,
//! timing each step and sampling resident memory against the baseline
//! captured just before the read.

use std::path::Path;
use std::time::Instant;

use polars::prelude::*;

use crate::bench::{BenchError, FILTER_THRESHOLD, Measurement, Operation, memory};
use crate::dataset::{COL_CATEGORY, COL_VALUE1, COL_VALUE2};

/// Mean-of-`value2` column in the groupby output
pub const GROUP_MEAN_COLUMN: &str = "value2_mean";

/// The derived operations in execution order. Read is separate because it
/// produces the table the others consume.
const DERIVED_OPS: [(Operation, fn(&DataFrame) -> PolarsResult<DataFrame>); 3] = [
    (Operation::Sort, sort_frame),
    (Operation::Filter, filter_frame),
    (Operation::GroupBy, group_frame),
];

/// Load a dataset file into a DataFrame (eager, header row expected).
pub fn load_frame(path: &Path) -> PolarsResult<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()
}

/// Ascending sort by `value1`.
pub fn sort_frame(df: &DataFrame) -> PolarsResult<DataFrame> {
    df.clone()
        .lazy()
        .sort([COL_VALUE1], Default::default())
        .collect()
}

/// Rows whose `value1` strictly exceeds the threshold.
pub fn filter_frame(df: &DataFrame) -> PolarsResult<DataFrame> {
    df.clone()
        .lazy()
        .filter(col(COL_VALUE1).gt(lit(FILTER_THRESHOLD)))
        .collect()
}

/// Mean of `value2` per category label.
pub fn group_frame(df: &DataFrame) -> PolarsResult<DataFrame> {
    df.clone()
        .lazy()
        .group_by([col(COL_CATEGORY)])
        .agg([col(COL_VALUE2).mean().alias(GROUP_MEAN_COLUMN)])
        .collect()
}

/// Run the four operations against one dataset file.
///
/// Memory values are resident-set deltas against a baseline sampled
/// immediately before the read, so the read delta covers materializing the
/// table and later deltas accumulate everything since. Derived tables stay
/// alive until all four observations are done, matching a workload that
/// keeps its results in scope. A failing operation aborts the rest; no
/// partial measurements are returned.
pub fn run_file(path: &Path, size: usize) -> Result<Vec<Measurement>, BenchError> {
    let baseline_mb = memory::resident_mb()?;

    let (frame, read) = observe(Operation::Read, size, baseline_mb, || load_frame(path))?;
    let mut measurements = vec![read];

    // Holds each operation's output so the cumulative deltas stay comparable.
    let mut derived = Vec::with_capacity(DERIVED_OPS.len());
    for (operation, op_fn) in DERIVED_OPS {
        let (out, measurement) = observe(operation, size, baseline_mb, || op_fn(&frame))?;
        derived.push(out);
        measurements.push(measurement);
    }

    Ok(measurements)
}

/// Time one operation, then sample memory growth over the baseline.
fn observe<F>(
    operation: Operation,
    size: usize,
    baseline_mb: f64,
    run: F,
) -> Result<(DataFrame, Measurement), BenchError>
where
    F: FnOnce() -> PolarsResult<DataFrame>,
{
    let started = Instant::now();
    let frame = run()?;
    let time_secs = started.elapsed().as_secs_f64();
    let memory_mb = memory::resident_mb()? - baseline_mb;

    Ok((
        frame,
        Measurement {
            size,
            operation,
            time_secs,
            memory_mb,
        },
    ))
}
