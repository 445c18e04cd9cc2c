//! Beacon configuration
//!
//! Loaded once at process entry and passed by value to the components
//! that need it. Sources, in increasing precedence:
//! - built-in defaults
//! - optional TOML file (path via `BEACON_CONFIG`, default `beacon.toml`)
//! - `PORT` environment variable

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Destination and timing for the status beacon.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BeaconConfig {
    /// Host address for UDP messages
    pub host: String,
    /// UDP port to send messages to
    pub port: u16,
    /// Interval (ms) between sending UDP messages
    pub interval_ms: u64,
    /// Startup delay (ms) before the send loop begins. Conservative so
    /// the device identity has time to become available.
    pub startup_delay_ms: u64,
}

impl Default for BeaconConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            interval_ms: 5_000,
            startup_delay_ms: 60_000,
        }
    }
}

impl BeaconConfig {
    /// Load and validate the configuration from file and environment.
    pub async fn load() -> Result<Self> {
        let path = std::env::var("BEACON_CONFIG").unwrap_or_else(|_| "beacon.toml".into());
        let mut config = Self::from_file(&path).await?;

        if let Ok(raw) = std::env::var("PORT") {
            config.port = parse_port(&raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    async fn from_file(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            debug!("no config file at {}, using defaults", path);
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {path}"))?;
        toml::from_str(&content).with_context(|| format!("Invalid config file {path}"))
    }

    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            bail!("destination port must be nonzero");
        }
        if self.interval_ms == 0 {
            bail!("send interval must be nonzero");
        }
        Ok(())
    }
}

/// Parse a `PORT` override, rejecting anything that is not a valid u16.
fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse::<u16>()
        .with_context(|| format!("invalid PORT value {raw:?}"))
}
