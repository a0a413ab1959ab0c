//! Command-line arguments.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use linefind_config::{defaults, Config, Grouping};
use linefind_core::TextRange;

/// Search a file and print a summary of the matches.
#[derive(Debug, Clone, Parser)]
#[command(name = "linefind", version, about)]
pub struct Args {
    /// File to search
    #[arg(required_unless_present = "toggle")]
    pub file: Option<PathBuf>,

    /// Search pattern (taken from --selection when omitted)
    pub pattern: Option<String>,

    /// Treat PATTERN as a regular expression
    #[arg(short, long)]
    pub regex: bool,

    /// Match case exactly
    #[arg(short, long)]
    pub case_sensitive: bool,

    /// Only match whole words
    #[arg(short, long)]
    pub whole_word: bool,

    /// One report line per match
    #[arg(long, conflicts_with = "per_row")]
    pub per_match: bool,

    /// One report line per row
    #[arg(long)]
    pub per_row: bool,

    /// Keep indentation (per-row only)
    #[arg(long)]
    pub keep_indent: bool,

    /// Truncate report lines longer than N characters
    #[arg(long, value_name = "N", value_parser = parse_line_length)]
    pub max_line_length: Option<usize>,

    /// Take the pattern from this selection (char offsets)
    #[arg(long, value_name = "START:END", value_parser = parse_range)]
    pub selection: Option<TextRange>,

    /// Summarize the given ranges instead of searching
    #[arg(
        long,
        value_name = "START:END",
        value_parser = parse_range,
        value_delimiter = ','
    )]
    pub summarize: Vec<TextRange>,

    /// Resolve a click on the printed report (0-based); may be repeated
    #[arg(long = "click", value_name = "ROW:COL", value_parser = parse_position)]
    pub clicks: Vec<(usize, usize)>,

    /// Flip a search option and save it to the config file
    #[arg(long, value_enum, value_name = "OPTION")]
    pub toggle: Option<SearchToggle>,

    /// Use this config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Re-run when the config file changes
    #[arg(long)]
    pub watch: bool,
}

/// Search option that `--toggle` persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchToggle {
    Regex,
    CaseSensitive,
    WholeWord,
}

impl SearchToggle {
    /// Name of the option in the `[search]` config section.
    pub fn option_name(self) -> &'static str {
        match self {
            SearchToggle::Regex => "regex",
            SearchToggle::CaseSensitive => "case_sensitive",
            SearchToggle::WholeWord => "whole_word",
        }
    }
}

impl Args {
    /// Config snapshot with the command-line overrides applied.
    pub fn apply(&self, config: &Config) -> Config {
        let mut config = config.clone();
        config.search.regex |= self.regex;
        config.search.case_sensitive |= self.case_sensitive;
        config.search.whole_word |= self.whole_word;
        config.display.keep_indent |= self.keep_indent;
        if self.per_match {
            config.display.grouping = Grouping::PerMatch;
        } else if self.per_row {
            config.display.grouping = Grouping::PerRow;
        }
        if let Some(n) = self.max_line_length {
            config.display.max_line_length = n;
        }
        config
    }
}

fn parse_position(raw: &str) -> Result<(usize, usize), String> {
    let (a, b) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected A:B, got '{}'", raw))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid number '{}': {}", s, e))
    };
    Ok((parse(a)?, parse(b)?))
}

fn parse_range(raw: &str) -> Result<TextRange, String> {
    let (start, end) = parse_position(raw)?;
    Ok(TextRange::new(start, end))
}

fn parse_line_length(raw: &str) -> Result<usize, String> {
    let n: usize = raw
        .parse()
        .map_err(|e| format!("invalid line length '{}': {}", raw, e))?;
    if n < defaults::MIN_LINE_LENGTH {
        return Err(format!("must be at least {}", defaults::MIN_LINE_LENGTH));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("linefind").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_positional() {
        let args = parse(&["src/main.rs", "foo"]).unwrap();
        assert_eq!(args.file, Some(PathBuf::from("src/main.rs")));
        assert_eq!(args.pattern.as_deref(), Some("foo"));
        assert!(parse(&["a", "b", "c"]).is_err());
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_flags_and_values() {
        let args = parse(&[
            "-r",
            "--per-match",
            "--max-line-length",
            "40",
            "--click",
            "2:7",
            "--click",
            "0:0",
            "--summarize",
            "0:3,10:4",
            "file.txt",
        ])
        .unwrap();
        assert!(args.regex);
        assert!(args.per_match);
        assert_eq!(args.max_line_length, Some(40));
        assert_eq!(args.clicks, vec![(2, 7), (0, 0)]);
        assert_eq!(
            args.summarize,
            vec![TextRange::new(0, 3), TextRange::new(4, 10)]
        );
    }

    #[test]
    fn test_errors() {
        assert!(parse(&["--bogus", "f"]).is_err());
        assert!(parse(&["f", "--click"]).is_err());
        assert!(parse(&["f", "--click", "12"]).is_err());
        assert!(parse(&["f", "--max-line-length", "2"]).is_err());
        assert!(parse(&["f", "--per-match", "--per-row"]).is_err());
    }

    #[test]
    fn test_toggle_without_file() {
        let args = parse(&["--toggle", "case-sensitive"]).unwrap();
        assert_eq!(args.toggle, Some(SearchToggle::CaseSensitive));
        assert_eq!(args.file, None);
        assert_eq!(SearchToggle::WholeWord.option_name(), "whole_word");
        assert!(parse(&["--toggle", "loud"]).is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let args = parse(&["-w", "--keep-indent", "--per-match", "f"]).unwrap();
        let config = args.apply(&Config::default());
        assert!(config.search.whole_word);
        assert!(!config.search.regex);
        assert!(config.display.keep_indent);
        assert_eq!(config.display.grouping, Grouping::PerMatch);
    }
}
