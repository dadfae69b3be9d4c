//! Firebase Realtime Database connection settings.

use std::fmt;

use super::ConfigError;

/// Environment variable holding the database endpoint URL.
pub const ENV_DATABASE_URL: &str = "FIREBASE_DATABASE_URL";

/// Environment variable holding the legacy database access token.
pub const ENV_AUTH_TOKEN: &str = "FIREBASE_AUTH_TOKEN";

/// Connection settings for the realtime database.
///
/// Both values are required; the binaries fail fast before doing any work if
/// either is absent. The token is a legacy database secret sent as an `auth`
/// query parameter on every request.
#[derive(Clone)]
pub struct FirebaseConfig {
    /// Database endpoint, e.g. `https://my-project.firebaseio.com`.
    pub database_url: String,

    /// Legacy access token. Never logged.
    pub auth_token: String,
}

impl FirebaseConfig {
    /// Read the connection settings from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require_env(ENV_DATABASE_URL)?,
            auth_token: require_env(ENV_AUTH_TOKEN)?,
        })
    }
}

// The token must not leak through debug logging of config structs.
impl fmt::Debug for FirebaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirebaseConfig")
            .field("database_url", &self.database_url)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

fn require_env(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::EnvVarNotFound(name.to_string())),
    }
}
