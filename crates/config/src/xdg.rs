//! XDG Base Directory support for linefind.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "linefind";

/// Get the configuration directory following XDG conventions.
///
/// Returns `$XDG_CONFIG_HOME/linefind` or `~/.config/linefind`.
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine config directory")
}

/// Get the cache directory following XDG conventions.
///
/// Returns `$XDG_CACHE_HOME/linefind` or `~/.cache/linefind`.
/// Used for the default log file location.
pub fn get_cache_dir() -> Result<PathBuf> {
    dirs::cache_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine cache directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_dir() {
        let dir = get_config_dir().unwrap();
        assert!(dir.ends_with("linefind"));
    }

    #[test]
    fn test_directories_are_different() {
        let config = get_config_dir().unwrap();
        let cache = get_cache_dir().unwrap();
        assert_ne!(config, cache);
    }
}
