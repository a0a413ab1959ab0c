//! Configuration management for linefind.
//!
//! This crate provides configuration loading, saving, and validation
//! with support for TOML format and XDG directory conventions, plus a
//! reloadable snapshot store.

mod settings;
mod store;
mod xdg;

pub use settings::{
    Config, DisplaySettings, Grouping, LoggingSettings, SearchSettings, SelectionSettings,
};
pub use store::ConfigStore;
pub use xdg::{get_cache_dir, get_config_dir};

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use linefind_logger::LogLevel;

/// Default values as constants
pub mod defaults {
    pub const AUTO_SELECT: bool = true;
    pub const MAX_LINE_LENGTH: usize = 100;
    /// Shortest usable line: one character plus the ellipsis.
    pub const MIN_LINE_LENGTH: usize = 4;
    pub const COLOR: &str = "region.purplish";
    pub const FLASH_DURATION_MS: u64 = 3000;
    pub const MIN_LOG_LEVEL: &str = "info";
    pub const MAX_LOG_ENTRIES: usize = 1000;
}

impl Config {
    /// Load configuration from a specific file.
    ///
    /// Creates the file with default values if it is missing and
    /// rewrites it when missing keys had to be filled in.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let original_content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::validate_content(&original_content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;

        // Serialize back to get normalized content
        let normalized_content = toml::to_string_pretty(&config)?;
        if original_content != normalized_content {
            config.save_to(path)?;
        }

        Ok(config)
    }

    /// Save configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Parse and validate config content.
    pub fn validate_content(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))?;

        if config.display.max_line_length < defaults::MIN_LINE_LENGTH {
            bail!(
                "display.max_line_length must be at least {}, got {}",
                defaults::MIN_LINE_LENGTH,
                config.display.max_line_length
            );
        }
        config
            .logging
            .min_level
            .parse::<LogLevel>()
            .map_err(|e| anyhow::anyhow!(e))?;

        Ok(config)
    }

    /// Flip one of the search options by name.
    ///
    /// Accepts `regex`, `case_sensitive` and `whole_word`.
    pub fn toggle_search_option(&mut self, option: &str) -> Result<bool> {
        let flag = match option {
            "regex" => &mut self.search.regex,
            "case_sensitive" => &mut self.search.case_sensitive,
            "whole_word" => &mut self.search.whole_word,
            _ => bail!("Unknown search option: {}", option),
        };
        *flag = !*flag;
        Ok(*flag)
    }

    /// Parsed minimum log level, falling back to the default.
    pub fn log_level(&self) -> LogLevel {
        self.logging.min_level.parse().unwrap_or(LogLevel::Info)
    }

    /// Log file location: the configured path or the cache directory.
    pub fn log_file_path(&self) -> Option<PathBuf> {
        match &self.logging.file_path {
            Some(path) => Some(PathBuf::from(path)),
            None => get_cache_dir().ok().map(|dir| dir.join("linefind.log")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.selection.auto_select);
        assert_eq!(config.display.max_line_length, 100);
        assert_eq!(config.display.grouping, Grouping::PerRow);
        assert!(!config.display.keep_indent);
        assert_eq!(config.display.color, "region.purplish");
        assert_eq!(config.search.options(), Default::default());
    }

    #[test]
    fn test_partial_content_fills_defaults() {
        let config = Config::validate_content(
            r#"
[display]
grouping = "per-match"
max_line_length = 40
"#,
        )
        .unwrap();
        assert_eq!(config.display.grouping, Grouping::PerMatch);
        assert_eq!(config.display.max_line_length, 40);
        assert_eq!(config.display.flash_duration_ms, 3000);
        assert!(config.selection.auto_select);
    }

    #[test]
    fn test_rejects_short_line_length() {
        let err = Config::validate_content("[display]\nmax_line_length = 3\n").unwrap_err();
        assert!(err.to_string().contains("max_line_length"));
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        assert!(Config::validate_content("[logging]\nmin_level = \"loud\"\n").is_err());
    }

    #[test]
    fn test_toggle_search_option() {
        let mut config = Config::default();
        assert!(config.toggle_search_option("regex").unwrap());
        assert!(config.search.regex);
        assert!(!config.toggle_search_option("regex").unwrap());
        assert!(config.toggle_search_option("whole_word").unwrap());
        assert!(config.toggle_search_option("bogus").is_err());
    }

    #[test]
    fn test_load_from_creates_and_normalizes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let created = Config::load_from(&path).unwrap();
        assert_eq!(created, Config::default());
        assert!(path.exists());

        std::fs::write(&path, "[search]\nregex = true\n").unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert!(loaded.search.regex);

        let rewritten = std::fs::read_to_string(&path).unwrap();
        assert!(rewritten.contains("max_line_length = 100"));
    }
}
