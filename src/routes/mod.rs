//! HTTP surface of the dashboard server.

mod health;
mod sensors;

use std::{collections::HashMap, sync::Arc};

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::Config,
    firebase::FirebaseClient,
    models::Category,
    streaming::{self, SnapshotSubscription},
};

/// Shared state for all request handlers.
///
/// One live subscription per category, opened at startup and held for the
/// server's lifetime. Handlers only ever read the latest delivered snapshot.
#[derive(Clone)]
pub struct AppState {
    pub subscriptions: Arc<HashMap<Category, SnapshotSubscription>>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Open subscriptions for every category and assemble the state.
    ///
    /// Event categories subscribe with a last-event query (N = 1); analog
    /// categories fetch the full detail-page history depth.
    pub fn new(client: FirebaseClient, config: Arc<Config>) -> Self {
        let interval = config.server.poll_interval();

        let subscriptions = Category::ALL
            .iter()
            .map(|&category| {
                let limit = if category.is_event() {
                    1
                } else {
                    config.server.history_limit
                };
                let subscription =
                    streaming::subscribe(client.clone(), category, limit, interval);
                (category, subscription)
            })
            .collect();

        Self {
            subscriptions: Arc::new(subscriptions),
            config,
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/sensors", get(sensors::overview))
        .route("/api/sensors/{category}", get(sensors::category_detail))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
