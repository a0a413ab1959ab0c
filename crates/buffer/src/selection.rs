//! Search pattern derivation from the current selection.

use linefind_core::{Document, TextRange};

use crate::RopeDocument;

/// Rules for turning a selection into a search pattern.
#[derive(Debug, Clone, Copy)]
pub struct PatternRules<'a> {
    /// Use the word under the caret when nothing is selected
    pub auto_select: bool,
    /// Characters stripped from both ends of an auto-selected word
    pub word_separators: &'a str,
    /// Selections of this length or longer are ignored
    pub max_len: usize,
}

/// Pattern taken from the document, with the range it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPattern {
    pub pattern: String,
    /// Where the pattern sits in the document (the report's jump origin)
    pub origin: TextRange,
}

/// Derive a search pattern from a selection.
///
/// A non-empty selection must be shorter than `max_len`, stay on one row
/// and contain something besides whitespace. An empty selection expands
/// to the word under the caret when `auto_select` is on.
pub fn pattern_from_selection(
    document: &RopeDocument,
    selection: TextRange,
    rules: &PatternRules,
) -> Option<SelectionPattern> {
    if !selection.is_empty() {
        if selection.len() >= rules.max_len {
            return None;
        }
        let (row_start, _) = document.row_col_of(selection.start);
        let (row_end, _) = document.row_col_of(selection.end);
        if row_start != row_end {
            return None;
        }

        let text = document.text_of_range(selection);
        return trimmed_pattern(&text, selection.start, |c| c.is_whitespace());
    }

    if !rules.auto_select {
        return None;
    }

    let word = document.word_at(selection.start);
    if word.is_empty() || word.len() >= rules.max_len {
        return None;
    }

    let text = document.text_of_range(word);
    trimmed_pattern(&text, word.start, |c| rules.word_separators.contains(c))
}

/// Strip characters from both ends and locate the remainder.
fn trimmed_pattern(
    text: &str,
    start: usize,
    strip: impl Fn(char) -> bool,
) -> Option<SelectionPattern> {
    let trimmed_start = text.trim_start_matches(&strip);
    let trimmed = trimmed_start.trim_end_matches(&strip);
    if trimmed.is_empty() {
        return None;
    }

    let lead = text[..text.len() - trimmed_start.len()].chars().count();
    let origin_start = start + lead;
    Some(SelectionPattern {
        pattern: trimmed.to_string(),
        origin: TextRange::new(origin_start, origin_start + trimmed.chars().count()),
    })
}
