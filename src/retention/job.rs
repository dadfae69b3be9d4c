//! The retention cleanup pass.

use chrono::Utc;
use serde_json::Value;

use crate::{config::RetentionConfig, firebase::FirebaseClient, models::Category};

/// Outcome of cleaning a single category.
#[derive(Debug, Clone)]
pub struct CategoryOutcome {
    pub category: Category,
    /// Children found under the category path.
    pub examined: u64,
    /// Children deleted (or that would be deleted, in dry-run mode).
    pub deleted: u64,
    /// Whether a fetch or delete error interrupted this category.
    pub failed: bool,
}

/// Results from a single retention run.
#[derive(Debug)]
pub struct RetentionReport {
    /// The cutoff applied uniformly to every category.
    pub cutoff_millis: i64,
    /// Per-category outcomes, in processing order.
    pub outcomes: Vec<CategoryOutcome>,
}

impl RetentionReport {
    /// Total number of records deleted across all categories.
    pub fn total_deleted(&self) -> u64 {
        self.outcomes.iter().map(|o| o.deleted).sum()
    }

    /// Categories that errored during this run.
    pub fn failed_categories(&self) -> Vec<Category> {
        self.outcomes
            .iter()
            .filter(|o| o.failed)
            .map(|o| o.category)
            .collect()
    }

    /// Check if any category failed.
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| o.failed)
    }
}

/// Run a single retention pass over all categories.
///
/// The cutoff is computed once at the start and applied uniformly; it is not
/// recomputed per category. Categories are processed strictly sequentially
/// in the fixed [`Category::ALL`] order. A failed category is logged and
/// flagged, and the run continues with the next one.
pub async fn run_retention(client: &FirebaseClient, config: &RetentionConfig) -> RetentionReport {
    let cutoff = config.cutoff_millis(Utc::now().timestamp_millis());
    let dry_run_msg = if config.dry_run { " (DRY RUN)" } else { "" };

    tracing::info!(
        retention_days = config.retention_days,
        cutoff_millis = cutoff,
        dry_run = config.dry_run,
        "Starting retention run{}",
        dry_run_msg
    );

    let mut outcomes = Vec::with_capacity(Category::ALL.len());
    for category in Category::ALL {
        let outcome = match clean_category(client, category, cutoff, config.dry_run).await {
            Ok(outcome) => {
                tracing::info!(
                    category = %category,
                    examined = outcome.examined,
                    deleted = outcome.deleted,
                    "Deleted old records{}",
                    dry_run_msg
                );
                outcome
            }
            Err(e) => {
                tracing::error!(category = %category, error = %e, "Error processing category");
                CategoryOutcome {
                    category,
                    examined: 0,
                    deleted: 0,
                    failed: true,
                }
            }
        };
        outcomes.push(outcome);
    }

    let report = RetentionReport {
        cutoff_millis: cutoff,
        outcomes,
    };

    tracing::info!(
        total_deleted = report.total_deleted(),
        failed_categories = report.failed_categories().len(),
        "Retention run complete{}",
        dry_run_msg
    );

    report
}

/// Clean a single category: fetch every child, delete the expired ones one
/// at a time. No batching and no retry; a failed delete propagates and the
/// record stays for the next run.
async fn clean_category(
    client: &FirebaseClient,
    category: Category,
    cutoff: i64,
    dry_run: bool,
) -> Result<CategoryOutcome, crate::firebase::FirebaseError> {
    let path = category.storage_path();

    let Some(children) = client.fetch_children(&path).await? else {
        tracing::info!(category = %category, "No data found");
        return Ok(CategoryOutcome {
            category,
            examined: 0,
            deleted: 0,
            failed: false,
        });
    };

    let examined = children.len() as u64;
    tracing::debug!(category = %category, records = examined, "Fetched category children");

    let mut deleted = 0;
    for (record_id, record) in &children {
        if !is_expired(record, cutoff) {
            continue;
        }

        if dry_run {
            tracing::info!(
                category = %category,
                record_id = %record_id,
                "DRY RUN: Would delete record"
            );
            deleted += 1;
            continue;
        }

        client.delete(&format!("{path}/{record_id}")).await?;
        deleted += 1;
    }

    Ok(CategoryOutcome {
        category,
        examined,
        deleted,
        failed: false,
    })
}

/// A record is eligible for deletion only when its `timestamp` field is
/// present, numeric, and strictly older than the cutoff. Records without a
/// timestamp are never deleted.
fn is_expired(record: &Value, cutoff: i64) -> bool {
    record
        .get("timestamp")
        .and_then(Value::as_i64)
        .is_some_and(|ts| ts < cutoff)
}
