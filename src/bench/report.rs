//! Incremental CSV report writing.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::bench::{BenchError, Measurement};

/// Report header row
pub const HEADER: &str = "size,operation,time,memory";

/// Writes measurements to a CSV report as they complete.
///
/// The header goes out once at creation; `append` writes one unbuffered row
/// per measurement, so rows already recorded survive a crash later in the
/// run.
#[derive(Debug)]
pub struct ReportWriter {
    file: File,
}

impl ReportWriter {
    /// Create (or truncate) the report at `path` and write the header.
    pub fn create(path: &Path) -> Result<Self, BenchError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = File::create(path)?;
        writeln!(file, "{HEADER}")?;
        Ok(Self { file })
    }

    /// Append one measurement row.
    pub fn append(&mut self, m: &Measurement) -> Result<(), BenchError> {
        writeln!(
            self.file,
            "{},{},{},{}",
            m.size, m.operation, m.time_secs, m.memory_mb
        )?;
        Ok(())
    }
}
