//! Report header (the stat line).

use linefind_core::{SearchOptions, TextRange};

use crate::format::counted;

/// First line of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Stat text, without a line break
    pub stat: String,
    /// Source position the header jumps to (where the search started)
    pub origin: Option<TextRange>,
    /// Range inside `stat` to highlight
    pub emphasis: Option<TextRange>,
}

impl Header {
    pub fn new(stat: impl Into<String>) -> Self {
        Self {
            stat: stat.into(),
            origin: None,
            emphasis: None,
        }
    }

    /// `"3 matches of 'foo' (regex)"`, emphasizing the pattern.
    pub fn for_pattern(
        count: usize,
        pattern: &str,
        options: &SearchOptions,
        origin: Option<TextRange>,
    ) -> Self {
        let mut stat = format!("{} of '", counted(count, "match", "matches"));
        let begin = stat.chars().count();
        let shown = pattern.replace('\n', "\\n");
        stat.push_str(&shown);
        let end = begin + shown.chars().count();
        stat.push('\'');

        let label = options.label();
        if !label.is_empty() {
            stat.push(' ');
            stat.push_str(&label);
        }

        Self {
            stat,
            origin,
            emphasis: Some(TextRange::new(begin, end)),
        }
    }

    /// `"2 selections"`, used when summarizing selections directly.
    pub fn selections(count: usize) -> Self {
        Self::new(counted(count, "selection", "selections"))
    }

    pub fn with_origin(mut self, origin: TextRange) -> Self {
        self.origin = Some(origin);
        self
    }
}
