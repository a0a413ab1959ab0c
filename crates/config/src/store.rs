//! Reloadable configuration snapshot.

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::Config;

/// Holds the current configuration as an immutable snapshot.
///
/// Consumers take a snapshot per operation; a reload swaps the whole
/// snapshot and never mutates one that is already handed out.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    current: Arc<Config>,
}

impl ConfigStore {
    /// Load the config file, creating it with defaults if missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let config = Config::load_from(&path)?;
        Ok(Self {
            path,
            current: Arc::new(config),
        })
    }

    /// Store backed by the default config location.
    pub fn open_default() -> Result<Self> {
        Self::open(Config::config_file_path()?)
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Arc<Config> {
        Arc::clone(&self.current)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-read the file.
    ///
    /// Returns `true` when the configuration changed. On error the
    /// previous snapshot stays in place.
    pub fn reload(&mut self) -> Result<bool> {
        let config = match Config::load_from(&self.path) {
            Ok(config) => config,
            Err(e) => {
                linefind_logger::warn(format!("Config reload failed, keeping previous: {:#}", e));
                return Err(e);
            }
        };

        if config == *self.current {
            return Ok(false);
        }

        linefind_logger::info(format!("Config reloaded from {}", self.path.display()));
        self.current = Arc::new(config);
        Ok(true)
    }

    /// Apply a change, persist it and swap the snapshot.
    pub fn update(&mut self, change: impl FnOnce(&mut Config) -> Result<()>) -> Result<()> {
        let mut config = (*self.current).clone();
        change(&mut config)?;
        config.save_to(&self.path)?;
        self.current = Arc::new(config);
        Ok(())
    }
}
