//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI arguments, `PLANT_CATALOGUE_*` environment variables,
//! and configuration files, in OrthoConfig's usual precedence.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The bind address is not a valid socket address.
    #[error("invalid bind address {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Settings for the plant catalogue service.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PLANT_CATALOGUE")]
pub struct CatalogueSettings {
    /// Socket address for the HTTP listener.
    pub bind_addr: Option<String>,
    /// Directory for the JSON option store; options are not persisted when
    /// unset.
    pub option_store_dir: Option<PathBuf>,
    /// Artificial delay applied to every repository and store call.
    pub latency_ms: Option<u64>,
    /// Load the seed plants and comments at start-up.
    pub seed_enabled: Option<bool>,
}

impl CatalogueSettings {
    /// Parsed bind address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddr`] when the configured value
    /// does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value
            .parse()
            .map_err(|source| SettingsError::InvalidBindAddr {
                value: value.to_owned(),
                source,
            })
    }

    /// Option store directory, if persistence is enabled.
    pub fn option_store_dir(&self) -> Option<&Path> {
        self.option_store_dir.as_deref()
    }

    /// Artificial latency, if configured and non-zero.
    pub fn latency(&self) -> Option<Duration> {
        self.latency_ms
            .filter(|millis| *millis > 0)
            .map(Duration::from_millis)
    }

    /// Whether seed data is loaded; enabled unless explicitly disabled.
    pub fn seed_enabled(&self) -> bool {
        self.seed_enabled.unwrap_or(true)
    }
}
