//! Configuration structures for linefind settings.

use serde::{Deserialize, Serialize};

use linefind_core::SearchOptions;

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Pattern matching options
    #[serde(default)]
    pub search: SearchSettings,

    /// Pattern derivation from the selection
    #[serde(default)]
    pub selection: SelectionSettings,

    /// Report layout and styling
    #[serde(default)]
    pub display: DisplaySettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Pattern matching options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Treat the pattern as a regular expression
    #[serde(default)]
    pub regex: bool,

    /// Match case exactly
    #[serde(default)]
    pub case_sensitive: bool,

    /// Only match whole words
    #[serde(default)]
    pub whole_word: bool,
}

impl SearchSettings {
    /// Options handed to the match provider.
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            regex: self.regex,
            case_sensitive: self.case_sensitive,
            whole_word: self.whole_word,
        }
    }
}

/// Pattern derivation from the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSettings {
    /// Use the word under the caret when nothing is selected
    #[serde(default = "default_auto_select")]
    pub auto_select: bool,

    /// Characters stripped from both ends of an auto-selected word
    #[serde(default)]
    pub word_separators: String,
}

/// How matches are laid out in the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Grouping {
    /// One report line per match
    PerMatch,
    /// One report line per row, several highlights per line
    #[default]
    PerRow,
}

/// Report layout and styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Longest line content shown before truncating with an ellipsis
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    /// Report line layout
    #[serde(default)]
    pub grouping: Grouping,

    /// Keep original indentation (per-row grouping only)
    #[serde(default)]
    pub keep_indent: bool,

    /// Style tag used for highlights
    #[serde(default = "default_color")]
    pub color: String,

    /// How long a jump target stays highlighted
    #[serde(default = "default_flash_duration_ms")]
    pub flash_duration_ms: u64,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

// Default value functions for serde
fn default_auto_select() -> bool {
    defaults::AUTO_SELECT
}

fn default_max_line_length() -> usize {
    defaults::MAX_LINE_LENGTH
}

fn default_color() -> String {
    defaults::COLOR.to_string()
}

fn default_flash_duration_ms() -> u64 {
    defaults::FLASH_DURATION_MS
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            auto_select: default_auto_select(),
            word_separators: String::new(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
            grouping: Grouping::default(),
            keep_indent: false,
            color: default_color(),
            flash_duration_ms: default_flash_duration_ms(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
        }
    }
}
