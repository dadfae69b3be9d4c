//! Retention enforcement for sensor records.
//!
//! A single run computes one cutoff, walks the nine category paths in a
//! fixed order, and deletes children older than the retention window. One
//! category's failure never aborts the run; the failed category is flagged
//! and retried naturally on the next scheduled run.

mod job;

pub use job::{CategoryOutcome, RetentionReport, run_retention};
