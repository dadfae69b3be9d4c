//! HTTP server and subscription configuration.

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    time::Duration,
};

use serde::{Deserialize, Serialize};

/// Dashboard server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// How often each category subscription polls the database for a fresh
    /// snapshot, in seconds.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Records fetched per category subscription (detail-page history depth).
    #[serde(default = "default_history_limit")]
    pub history_limit: u32,

    /// Points included in overview sparkline previews.
    #[serde(default = "default_preview_limit")]
    pub preview_limit: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            poll_interval_secs: default_poll_interval_secs(),
            history_limit: default_history_limit(),
            preview_limit: default_preview_limit(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

fn default_port() -> u16 {
    8080
}

fn default_poll_interval_secs() -> u64 {
    5
}

fn default_history_limit() -> u32 {
    20
}

fn default_preview_limit() -> u32 {
    10
}

impl ServerConfig {
    /// Socket address to bind the listener to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Subscription poll interval as a Duration.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}
