//! Regex-backed match provider for linefind.
//!
//! Builds a [`Regex`] from the pattern and search options and reports
//! its matches as character ranges over a document.

use anyhow::{Context, Result};
use regex::Regex;

use linefind_core::{Document, MatchProvider, SearchOptions, TextRange};

/// Match provider using the `regex` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexMatcher;

impl RegexMatcher {
    pub fn new() -> Self {
        Self
    }
}

/// Build the regex for a pattern and option set.
pub fn build_regex(pattern: &str, options: &SearchOptions) -> Result<Regex> {
    let search_pattern = if options.regex {
        pattern.to_string()
    } else {
        regex::escape(pattern)
    };

    let search_pattern = if options.whole_word {
        format!(r"\b(?:{})\b", search_pattern)
    } else {
        search_pattern
    };

    let search_pattern = if options.case_sensitive {
        search_pattern
    } else {
        format!("(?i){}", search_pattern)
    };

    Regex::new(&search_pattern).with_context(|| format!("Invalid pattern: {}", pattern))
}

impl MatchProvider for RegexMatcher {
    fn find_all(
        &self,
        document: &dyn Document,
        pattern: &str,
        options: &SearchOptions,
    ) -> Result<Vec<TextRange>> {
        if pattern.is_empty() {
            return Ok(vec![]);
        }

        let regex = build_regex(pattern, options)?;
        let text = document.text();

        // Convert byte offsets to char offsets, walking forward only
        let mut matches = Vec::new();
        let mut byte_pos = 0;
        let mut char_pos = 0;
        for mat in regex.find_iter(&text) {
            char_pos += text[byte_pos..mat.start()].chars().count();
            let len = mat.as_str().chars().count();
            byte_pos = mat.start();

            matches.push(TextRange::new(char_pos, char_pos + len));
        }

        Ok(matches)
    }
}

/// Status line shown while a pattern is being typed.
///
/// `None` means there is no pattern yet.
pub fn preview_stat(count: Option<usize>) -> String {
    match count {
        None => String::new(),
        Some(0) => "Not found".to_string(),
        Some(1) => "1 match".to_string(),
        Some(n) => format!("{} matches", n),
    }
}

/// Find a match to reveal for the given visible range.
///
/// Binary search over sorted matches: returns the index of a match that
/// intersects `visible`, or the last index looked at when none does, so the
/// caller can scroll to something close by.
pub fn locate_visible(matches: &[TextRange], visible: TextRange) -> Option<usize> {
    if matches.is_empty() {
        return None;
    }

    let (mut lo, mut hi) = (0, matches.len());
    let mut mid = 0;
    while lo < hi {
        mid = lo + (hi - lo) / 2;
        let range = matches[mid];
        if visible.start >= range.end {
            lo = mid + 1;
        } else if visible.end <= range.start {
            hi = mid;
        } else {
            break;
        }
    }

    Some(mid)
}
