//! Search options and the match provider trait.

use anyhow::Result;

use crate::{Document, TextRange};

/// Search options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Use regex pattern.
    pub regex: bool,
    /// Case-sensitive search.
    pub case_sensitive: bool,
    /// Whole word only.
    pub whole_word: bool,
}

impl SearchOptions {
    /// Human readable list of enabled options, e.g. `(regex, whole word)`.
    ///
    /// Empty when no option is enabled.
    pub fn label(&self) -> String {
        let mut checked = Vec::new();
        if self.regex {
            checked.push("regex");
        }
        if self.case_sensitive {
            checked.push("case sensitive");
        }
        if self.whole_word {
            checked.push("whole word");
        }

        if checked.is_empty() {
            String::new()
        } else {
            format!("({})", checked.join(", "))
        }
    }
}

/// Source of match ranges for a pattern.
pub trait MatchProvider {
    /// Find all matches of `pattern` in document order.
    ///
    /// Returned ranges are sorted and non-overlapping.
    fn find_all(
        &self,
        document: &dyn Document,
        pattern: &str,
        options: &SearchOptions,
    ) -> Result<Vec<TextRange>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_empty() {
        assert_eq!(SearchOptions::default().label(), "");
    }

    #[test]
    fn test_label_lists_options_in_order() {
        let opts = SearchOptions {
            regex: true,
            case_sensitive: true,
            whole_word: true,
        };
        assert_eq!(opts.label(), "(regex, case sensitive, whole word)");

        let opts = SearchOptions {
            whole_word: true,
            ..Default::default()
        };
        assert_eq!(opts.label(), "(whole word)");
    }
}
