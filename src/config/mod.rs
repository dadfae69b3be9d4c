//! Configuration for the sylva binaries.
//!
//! The dashboard server is configured via a TOML file, with support for
//! environment variable interpolation using `${VAR_NAME}` syntax. The
//! Firebase connection is configured purely through environment variables
//! (shared with the cleanup job, which takes no other configuration).
//!
//! # Example
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [retention]
//! retention_days = 3
//! ```

mod firebase;
mod observability;
mod retention;
mod server;

use std::path::Path;

pub use firebase::{ENV_AUTH_TOKEN, ENV_DATABASE_URL, FirebaseConfig};
pub use observability::{LogFormat, LoggingConfig};
pub use retention::RetentionConfig;
use serde::{Deserialize, Serialize};
pub use server::ServerConfig;

/// Root configuration for the dashboard server.
///
/// All sections are optional with sensible defaults, so the server runs with
/// no config file at all. Firebase credentials are deliberately not part of
/// this file; they come from the environment via [`FirebaseConfig::from_env`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Retention window used by the cleanup job.
    #[serde(default)]
    pub retention: RetentionConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// Environment variables in the format `${VAR_NAME}` are expanded.
    /// Missing referenced variables cause an error.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(e, path.as_ref().to_path_buf()))?;

        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let expanded = expand_env_vars(contents)?;
        let config: Config = toml::from_str(&expanded).map_err(ConfigError::Parse)?;
        Ok(config)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {1}: {0}")]
    Io(std::io::Error, std::path::PathBuf),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),
}

/// Expand `${VAR_NAME}` references against the process environment.
fn expand_env_vars(input: &str) -> Result<String, ConfigError> {
    let re = regex::Regex::new(r"\$\{([^}]+)\}").expect("static regex");
    let mut result = String::with_capacity(input.len());
    let mut last_end = 0;

    for cap in re.captures_iter(input) {
        let whole = cap.get(0).expect("capture 0 always present");
        result.push_str(&input[last_end..whole.start()]);

        let var_name = &cap[1];
        let value = std::env::var(var_name)
            .map_err(|_| ConfigError::EnvVarNotFound(var_name.to_string()))?;
        result.push_str(&value);

        last_end = whole.end();
    }

    result.push_str(&input[last_end..]);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.retention.retention_days, 3);
        assert!(!config.retention.dry_run);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000
            poll_interval_secs = 2

            [retention]
            retention_days = 7
            dry_run = true

            [logging]
            format = "json"
            filter = "debug"
        "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.poll_interval_secs, 2);
        assert_eq!(config.retention.retention_days, 7);
        assert!(config.retention.dry_run);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        assert!(Config::from_toml("[databose]\nurl = \"x\"").is_err());
    }

    #[test]
    fn test_env_var_expansion() {
        temp_env::with_var("SYLVA_TEST_PORT", Some("9191"), || {
            let config = Config::from_toml("[server]\nport = ${SYLVA_TEST_PORT}").unwrap();
            assert_eq!(config.server.port, 9191);
        });
    }

    #[test]
    fn test_missing_env_var_is_an_error() {
        temp_env::with_var_unset("SYLVA_TEST_MISSING", || {
            let err = Config::from_toml("[server]\nport = ${SYLVA_TEST_MISSING}").unwrap_err();
            assert!(matches!(err, ConfigError::EnvVarNotFound(name) if name == "SYLVA_TEST_MISSING"));
        });
    }
}
