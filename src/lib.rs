//! # frame-bench
//!
//! `frame-bench` measures how long four DataFrame operations take and how
//! much resident memory they add, across synthetic datasets of increasing
//! size. It supports:
//!
//! - Seeded, reproducible dataset generation (sequential ids, categorical
//!   labels, normal and uniform numeric columns)
//! - Wall-clock timing of read, sort, filter and group-by-mean, always run
//!   in that order
//! - Resident-memory deltas against a baseline taken just before the read
//! - An incrementally written CSV report plus one console line per
//!   measurement
//!
//! # Measurement model
//!
//! Every memory number is a delta against a single baseline sampled right
//! before that size's read step. The read delta is the cost of materializing
//! the table; the sort, filter and groupby deltas are cumulative process
//! growth since the baseline, not per-operation costs. Times are always per
//! operation.
//!
//! # Example
//!
//! ```no_run
//! use frame_bench::bench::{self, BenchConfig, BenchError};
//!
//! fn main() -> Result<(), BenchError> {
//!     let config = BenchConfig {
//!         sizes: vec![10_000, 100_000],
//!         ..BenchConfig::default()
//!     };
//!
//!     for m in bench::harness::run(&config)? {
//!         println!("{} rows / {}: {:.4}s", m.size, m.operation, m.time_secs);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod bench;
pub mod dataset;
