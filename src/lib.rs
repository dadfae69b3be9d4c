//! Environmental sensor telemetry service.
//!
//! Two binaries share this crate: `sylva`, the dashboard API server, holds
//! one live snapshot subscription per sensor category against a Firebase
//! Realtime Database and serves display-ready JSON; `sylva-cleanup` is a
//! run-to-completion job enforcing the retention window across the same
//! category paths.

pub mod config;
pub mod firebase;
pub mod models;
pub mod observability;
pub mod retention;
pub mod routes;
pub mod sensors;
pub mod streaming;
