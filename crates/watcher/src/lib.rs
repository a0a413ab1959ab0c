//! Config file watcher for linefind.
//!
//! Watches the directory holding the config file with a debounced
//! notify watcher and reloads the [`ConfigStore`] when the file changes.

use anyhow::{Context, Result};
use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{new_debouncer, DebounceEventResult, Debouncer};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

use linefind_config::{Config, ConfigStore};

/// Debounce duration for filesystem events.
pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

/// Create a filesystem watcher with debouncing.
///
/// Returns a receiver for batches of changed paths and the watcher handle.
pub fn create_watcher(
    debounce_ms: u64,
) -> Result<(Receiver<Vec<PathBuf>>, Debouncer<RecommendedWatcher>)> {
    let (tx, rx) = mpsc::channel();

    let debouncer = new_debouncer(
        Duration::from_millis(debounce_ms),
        move |res: DebounceEventResult| match res {
            Ok(events) => {
                let paths: Vec<PathBuf> = events.into_iter().map(|e| e.path).collect();
                let _ = tx.send(paths);
            }
            Err(e) => linefind_logger::warn(format!("Watcher error: {:?}", e)),
        },
    )
    .context("Failed to create filesystem watcher")?;

    Ok((rx, debouncer))
}

/// Check if any changed path is the config file.
///
/// Only the config directory is watched, so the file name is enough and
/// survives symlinked or canonicalized event paths.
pub fn touches_config(paths: &[PathBuf], config_path: &Path) -> bool {
    let Some(name) = config_path.file_name() else {
        return false;
    };
    paths
        .iter()
        .any(|path| path == config_path || path.file_name() == Some(name))
}

/// Reloads configuration when its file changes.
pub struct ConfigWatcher {
    // Dropping the debouncer stops the watch
    _debouncer: Debouncer<RecommendedWatcher>,
    receiver: Receiver<Vec<PathBuf>>,
    config_path: PathBuf,
}

impl ConfigWatcher {
    /// Watch the config file behind `store`.
    pub fn new(store: &ConfigStore, debounce_ms: u64) -> Result<Self> {
        let config_path = store.path().to_path_buf();
        let dir = config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        let (receiver, mut debouncer) = create_watcher(debounce_ms)?;
        debouncer
            .watcher()
            .watch(&dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch path: {}", dir.display()))?;

        linefind_logger::debug(format!("Watching config at {}", config_path.display()));

        Ok(Self {
            _debouncer: debouncer,
            receiver,
            config_path,
        })
    }

    /// Handle pending events without blocking.
    ///
    /// Returns the new snapshot when the configuration changed.
    pub fn poll(&self, store: &mut ConfigStore) -> Option<Arc<Config>> {
        if self.drain() {
            Self::reload(store)
        } else {
            None
        }
    }

    /// Block until the config changes or `timeout` passes.
    pub fn wait(&self, store: &mut ConfigStore, timeout: Duration) -> Option<Arc<Config>> {
        match self.receiver.recv_timeout(timeout) {
            Ok(paths) => {
                // Fold the rest of the burst in before reloading once
                let touched = touches_config(&paths, &self.config_path) | self.drain();
                if touched {
                    Self::reload(store)
                } else {
                    None
                }
            }
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => {
                linefind_logger::warn("Config watcher disconnected");
                None
            }
        }
    }

    /// Consume queued batches; true if any touched the config file.
    fn drain(&self) -> bool {
        let mut touched = false;
        while let Ok(paths) = self.receiver.try_recv() {
            touched |= touches_config(&paths, &self.config_path);
        }
        touched
    }

    fn reload(store: &mut ConfigStore) -> Option<Arc<Config>> {
        match store.reload() {
            Ok(true) => Some(store.snapshot()),
            Ok(false) => None,
            // Already logged by the store; keep the previous snapshot
            Err(_) => None,
        }
    }
}
