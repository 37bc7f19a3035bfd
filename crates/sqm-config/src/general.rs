//! General application configuration.

use serde::{Deserialize, Serialize};
use sqm_core::{ExportFormat, StructureType};

use crate::error::ConfigError;

fn default_type() -> String {
    String::from("monument")
}

fn default_format() -> String {
    String::from("xz")
}

/// Default status poll interval, in milliseconds.
const fn default_poll_interval_ms() -> u64 {
    800
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Structure type used by `sqm add` when `--type` is not given.
    #[serde(default = "default_type")]
    pub default_type: String,

    /// Export format used by `sqm export` when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,

    /// How often `sqm watch` re-reads the coordinate source.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_type: default_type(),
            default_format: default_format(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl GeneralConfig {
    /// The configured default structure type.
    #[must_use]
    pub fn structure_type(&self) -> StructureType {
        StructureType::parse(&self.default_type)
    }

    /// The configured default export format.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for unknown format names.
    pub fn export_format(&self) -> Result<ExportFormat, ConfigError> {
        self.default_format
            .parse()
            .map_err(|error: sqm_core::CoreError| ConfigError::InvalidValue {
                field: "general.default_format".into(),
                reason: error.to_string(),
            })
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.default_type.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.default_type".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.poll_interval_ms".into(),
                reason: "must be greater than zero".into(),
            });
        }
        self.export_format().map(|_| ())
    }
}
