//! Where markers are persisted.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use sqm_core::DEFAULT_STORAGE_KEY;

use crate::error::ConfigError;

fn default_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding one JSON file per storage key. Empty means the
    /// user data directory (`~/.local/share/sqmark` on Linux).
    #[serde(default)]
    pub dir: String,

    /// Key the marker list is stored under.
    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            key: default_key(),
        }
    }
}

impl StorageConfig {
    /// Whether an explicit directory is configured.
    #[must_use]
    pub fn has_explicit_dir(&self) -> bool {
        !self.dir.trim().is_empty()
    }

    /// The storage directory, falling back to the user data directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoStorageDir` if no directory is configured and
    /// the platform has no data directory.
    pub fn resolved_dir(&self) -> Result<PathBuf, ConfigError> {
        if self.has_explicit_dir() {
            return Ok(PathBuf::from(self.dir.trim()));
        }
        dirs::data_dir()
            .map(|dir| dir.join("sqmark"))
            .ok_or(ConfigError::NoStorageDir)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.key".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = StorageConfig::default();
        assert!(!config.has_explicit_dir());
        assert_eq!(config.key, "squaremap_structures_v21");
    }

    #[test]
    fn explicit_dir_wins() {
        let config = StorageConfig {
            dir: " /tmp/sqmark ".into(),
            ..StorageConfig::default()
        };
        assert_eq!(config.resolved_dir().unwrap(), PathBuf::from("/tmp/sqmark"));
    }

    #[test]
    fn blank_key_is_invalid() {
        let config = StorageConfig {
            key: "  ".into(),
            ..StorageConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
