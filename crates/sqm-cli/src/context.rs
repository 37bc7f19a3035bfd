use std::path::PathBuf;

use anyhow::Context;
use sqm_config::SqmConfig;
use sqm_store::{FileStorage, MarkerStore};

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: SqmConfig,
    pub store: MarkerStore<FileStorage>,
}

impl AppContext {
    /// Open the marker store at the configured location. `--storage-dir` and
    /// `--key` win over the config file.
    pub fn init(config: SqmConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let dir = match &flags.storage_dir {
            Some(dir) => PathBuf::from(dir),
            None => config.storage.resolved_dir()?,
        };
        let key = flags
            .key
            .clone()
            .unwrap_or_else(|| config.storage.key.clone());

        let storage = FileStorage::new(&dir)
            .with_context(|| format!("failed to open storage directory {}", dir.display()))?;
        // Surface bad keys here rather than as swallowed write failures later.
        storage.path_for(&key)?;

        tracing::debug!(dir = %dir.display(), key = %key, "opening marker store");
        let store = MarkerStore::open(storage, key);
        Ok(Self { config, store })
    }
}
