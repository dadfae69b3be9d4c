//! Retention window configuration for the cleanup job.

use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Controls which records the cleanup job deletes.
///
/// Records whose `timestamp` is older than `retention_days` are eligible for
/// deletion. `dry_run` logs what would be deleted without deleting anything,
/// for testing a retention policy before enabling it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetentionConfig {
    /// Days to keep sensor records.
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,

    /// If true, log eligible records without deleting them.
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            retention_days: default_retention_days(),
            dry_run: false,
        }
    }
}

fn default_retention_days() -> u32 {
    3
}

impl RetentionConfig {
    /// Deletion cutoff in epoch milliseconds for a run starting at
    /// `now_millis`. Records strictly older than this are eligible.
    pub fn cutoff_millis(&self, now_millis: i64) -> i64 {
        now_millis - i64::from(self.retention_days) * MILLIS_PER_DAY
    }
}
