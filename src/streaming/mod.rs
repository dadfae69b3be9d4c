//! Live snapshot subscriptions over the realtime database.
//!
//! A subscription produces a lazy, unbounded sequence of full-snapshot
//! values for one category's "last N by timestamp" query. Each delivery is a
//! complete replacement of the previous result set, never a delta, so
//! consumers re-derive display state from scratch on every delivery and the
//! channel semantics are last-snapshot-wins. Cancelling (or dropping the
//! handle) stops delivery.

use std::time::Duration;

use chrono::Utc;
use tokio::{sync::watch, task::JoinHandle, time};

use crate::{
    firebase::FirebaseClient,
    models::{Category, SensorReading, parse_snapshot},
};

/// A complete point-in-time result set delivered by a live query.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Readings sorted ascending by timestamp.
    pub readings: Vec<SensorReading>,
    /// When this snapshot was fetched, epoch milliseconds.
    pub fetched_at: i64,
}

impl Snapshot {
    /// The most recent reading in this snapshot.
    pub fn latest(&self) -> Option<&SensorReading> {
        self.readings.last()
    }
}

/// Handle to a live subscription for one category.
///
/// The poll task runs for the lifetime of the handle; dropping it cancels
/// delivery. The channel holds `None` until the first successful fetch,
/// which is the dashboard's loading/empty state.
pub struct SnapshotSubscription {
    category: Category,
    rx: watch::Receiver<Option<Snapshot>>,
    task: JoinHandle<()>,
}

impl SnapshotSubscription {
    pub fn category(&self) -> Category {
        self.category
    }

    /// The most recently delivered snapshot, if any delivery has happened.
    pub fn latest(&self) -> Option<Snapshot> {
        self.rx.borrow().clone()
    }

    /// A receiver that can be awaited for subsequent deliveries.
    pub fn watcher(&self) -> watch::Receiver<Option<Snapshot>> {
        self.rx.clone()
    }

    /// Stop delivery. Idempotent; also happens on drop.
    pub fn cancel(&self) {
        self.task.abort();
    }
}

impl Drop for SnapshotSubscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Open a live subscription to a category's last-N query.
///
/// The first fetch happens immediately; subsequent fetches run at the poll
/// interval. A failed poll is logged and the previous snapshot stays in
/// place; consumers cannot distinguish a failed subscription from one that
/// has not yet delivered new data.
pub fn subscribe(
    client: FirebaseClient,
    category: Category,
    limit: u32,
    interval: Duration,
) -> SnapshotSubscription {
    let (tx, rx) = watch::channel(None);
    let task = tokio::spawn(poll_loop(client, category, limit, interval, tx));

    SnapshotSubscription { category, rx, task }
}

async fn poll_loop(
    client: FirebaseClient,
    category: Category,
    limit: u32,
    interval: Duration,
    tx: watch::Sender<Option<Snapshot>>,
) {
    let path = category.storage_path();
    let mut ticker = time::interval(interval);
    ticker.set_missed_tick_behavior(time::MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        match client.query_last_n(&path, "timestamp", limit).await {
            Ok(children) => {
                let readings = children.as_ref().map(parse_snapshot).unwrap_or_default();
                let snapshot = Snapshot {
                    readings,
                    fetched_at: Utc::now().timestamp_millis(),
                };
                if tx.send(Some(snapshot)).is_err() {
                    // All receivers gone; nothing left to deliver to.
                    return;
                }
            }
            Err(e) => {
                tracing::warn!(
                    category = %category,
                    error = %e,
                    "Snapshot poll failed, keeping previous snapshot"
                );
            }
        }
    }
}
