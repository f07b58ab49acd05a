//! Run orchestration: generate, measure, record, announce.

use tracing::{debug, info};

use crate::bench::report::ReportWriter;
use crate::bench::{BenchConfig, BenchError, Measurement, dataset_filename, runner};
use crate::dataset::{self, DatasetSpec};

/// Run the full benchmark described by `config`.
///
/// For each size in order: write `test_data_{size}.csv` under the data
/// directory, run the four operations over it, and append every measurement
/// to the report as soon as it exists, echoing one line per measurement to
/// stdout. Dataset files are left on disk afterwards. The first failure
/// anywhere aborts the run; rows already appended stay in the report.
pub fn run(config: &BenchConfig) -> Result<Vec<Measurement>, BenchError> {
    config.validate()?;

    std::fs::create_dir_all(&config.data_dir)?;
    let mut report = ReportWriter::create(&config.output_path)?;
    info!(
        report = %config.output_path.display(),
        sizes = config.sizes.len(),
        "benchmark starting"
    );

    let mut measurements = Vec::with_capacity(config.sizes.len() * 4);
    for &size in &config.sizes {
        let path = config.data_dir.join(dataset_filename(size));
        let spec = DatasetSpec::new(size)
            .with_seed(config.seed)
            .with_categories(config.categories);
        dataset::write_csv(&spec, &path)?;
        debug!(rows = size, file = %path.display(), "dataset generated");

        for measurement in runner::run_file(&path, size)? {
            report.append(&measurement)?;
            println!(
                "Size: {}, Operation: {}, Time: {:.4}s, Memory: {:.2}MB",
                measurement.size,
                measurement.operation,
                measurement.time_secs,
                measurement.memory_mb
            );
            measurements.push(measurement);
        }
    }

    info!(rows = measurements.len(), "benchmark finished");
    Ok(measurements)
}
