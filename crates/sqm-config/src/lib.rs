//! # sqm-config
//!
//! Layered configuration loading for sqmark using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SQMARK_*` prefix, `__` as separator)
//! 2. Project-level `.sqmark/config.toml`
//! 3. User-level `~/.config/sqmark/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SQMARK_STORAGE__DIR` -> `storage.dir`,
//! `SQMARK_GENERAL__POLL_INTERVAL_MS` -> `general.poll_interval_ms`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use sqm_config::SqmConfig;
//!
//! let config = SqmConfig::load_with_dotenv().expect("config");
//! println!("markers stored under key {}", config.storage.key);
//! ```

mod error;
mod general;
mod storage;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "SQMARK_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SqmConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SqmConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".sqmark/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check every section for unusable values.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError::InvalidValue` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.storage.validate()?;
        self.general.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sqmark").join("config.toml"))
    }
}
