//! Retention cleanup job.
//!
//! Run-to-completion: reads `FIREBASE_DATABASE_URL` and
//! `FIREBASE_AUTH_TOKEN` from the environment, deletes records older than
//! the retention window across every sensor category, prints a summary
//! block, and exits nonzero if configuration was missing or any category
//! failed. Takes no command-line arguments; meant to run from a scheduler.

use std::process::ExitCode;

use sylva::{
    config::{Config, FirebaseConfig},
    firebase::FirebaseClient,
    observability, retention,
};

/// Optional path to a TOML config file (retention window, logging).
const ENV_CONFIG_FILE: &str = "SYLVA_CONFIG";

#[tokio::main]
async fn main() -> ExitCode {
    let config = match std::env::var(ENV_CONFIG_FILE) {
        Ok(path) => match Config::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {e}");
                return ExitCode::FAILURE;
            }
        },
        Err(_) => Config::default(),
    };

    observability::init_tracing(&config.logging);

    let firebase = match FirebaseConfig::from_env() {
        Ok(firebase) => firebase,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let client = match FirebaseClient::new(&firebase) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let report = retention::run_retention(&client, &config.retention).await;

    println!();
    println!("========================================");
    println!("Total records deleted: {}", report.total_deleted());
    println!("========================================");

    if report.has_failures() {
        for category in report.failed_categories() {
            eprintln!("Error: cleanup failed for category {category}");
        }
        eprintln!("Completed with errors");
        return ExitCode::FAILURE;
    }

    println!("Completed successfully");
    ExitCode::SUCCESS
}
