//! Test doubles for the document and surface traits.

use anyhow::{bail, Result};

use linefind_core::{Document, Line, ReportSurface, TextRange};

/// Document over a plain string, split on `\n` only.
pub(crate) struct MockDocument {
    chars: Vec<char>,
    line_starts: Vec<usize>,
}

impl MockDocument {
    pub(crate) fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let mut line_starts = vec![0];
        for (i, c) in chars.iter().enumerate() {
            if *c == '\n' {
                line_starts.push(i + 1);
            }
        }
        Self { chars, line_starts }
    }

    fn line_index(&self, offset: usize) -> usize {
        let offset = offset.min(self.chars.len());
        self.line_starts.partition_point(|&start| start <= offset) - 1
    }

    /// Char range of every occurrence of `needle`, in order.
    pub(crate) fn find(&self, needle: &str) -> Vec<TextRange> {
        let needle: Vec<char> = needle.chars().collect();
        let mut found = Vec::new();
        let mut i = 0;
        while i + needle.len() <= self.chars.len() {
            if self.chars[i..i + needle.len()] == needle[..] {
                found.push(TextRange::new(i, i + needle.len()));
                i += needle.len();
            } else {
                i += 1;
            }
        }
        found
    }
}

impl Document for MockDocument {
    fn len_chars(&self) -> usize {
        self.chars.len()
    }

    fn line_containing(&self, offset: usize) -> Line {
        let index = self.line_index(offset);
        let start = self.line_starts[index];
        let end = match self.line_starts.get(index + 1) {
            Some(next) => next - 1,
            None => self.chars.len(),
        };
        Line {
            text: self.chars[start..end].iter().collect(),
            start,
            end,
        }
    }

    fn row_col_of(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.chars.len());
        let index = self.line_index(offset);
        (index + 1, offset - self.line_starts[index] + 1)
    }

    fn text_of_range(&self, range: TextRange) -> String {
        let end = range.end.min(self.chars.len());
        let start = range.start.min(end);
        self.chars[start..end].iter().collect()
    }
}

/// Surface that records what was published.
#[derive(Debug, Default)]
pub(crate) struct MockSurface {
    pub(crate) text: String,
    pub(crate) highlights: Vec<TextRange>,
    pub(crate) style: String,
    pub(crate) read_only: bool,
}

impl ReportSurface for MockSurface {
    fn append(&mut self, text: &str) -> Result<()> {
        if self.read_only {
            bail!("surface is read-only");
        }
        self.text.push_str(text);
        Ok(())
    }

    fn mark_highlights(&mut self, ranges: &[TextRange], style: &str) {
        self.highlights = ranges.to_vec();
        self.style = style.to_string();
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    fn offset_at(&self, row: usize, col: usize) -> Option<usize> {
        let mut offset = 0;
        for (i, line) in self.text.split('\n').enumerate() {
            let len = line.chars().count();
            if i == row {
                return (col <= len).then_some(offset + col);
            }
            offset += len + 1;
        }
        None
    }
}

/// Substring of `text` by char range.
pub(crate) fn slice(text: &str, range: TextRange) -> String {
    text.chars()
        .skip(range.start)
        .take(range.end - range.start)
        .collect()
}
