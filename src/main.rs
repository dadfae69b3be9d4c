//! Dashboard API server entry point.

use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use sylva::{
    config::{Config, FirebaseConfig},
    firebase::FirebaseClient,
    observability,
    routes::{self, AppState},
};

#[derive(Debug, Parser)]
#[command(name = "sylva", version, about = "Environmental sensor dashboard API")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {e}");
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    observability::init_tracing(&config.logging);

    let firebase = match FirebaseConfig::from_env() {
        Ok(firebase) => firebase,
        Err(e) => {
            tracing::error!(error = %e, "Missing database configuration");
            std::process::exit(1);
        }
    };

    let client = match FirebaseClient::new(&firebase) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create database client");
            std::process::exit(1);
        }
    };

    let config = Arc::new(config);
    let addr = config.server.bind_addr();
    let state = AppState::new(client, config);
    let app = routes::router(state);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "Failed to bind listener");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, "Dashboard API listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install shutdown signal handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
