use anyhow::{Context, Result};
use ropey::Rope;
use std::path::{Path, PathBuf};
use unicode_segmentation::UnicodeSegmentation;

use linefind_core::{Document, Line, TextRange};

/// Source document based on Rope for efficient line lookups in large files
#[derive(Debug, Clone)]
pub struct RopeDocument {
    /// Rope structure for storing text
    rope: Rope,
    /// File path (if loaded from disk)
    file_path: Option<PathBuf>,
}

/// Characters ropey treats as line breaks.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

impl RopeDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            file_path: None,
        }
    }

    /// Create a document from in-memory text
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            file_path: None,
        }
    }

    /// Load file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(Self {
            rope: Rope::from_str(&contents),
            file_path: Some(path.to_path_buf()),
        })
    }

    /// Get file path
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    fn line_index(&self, offset: usize) -> usize {
        self.rope.char_to_line(offset.min(self.rope.len_chars()))
    }

    /// Word around the given offset, following Unicode word boundaries.
    ///
    /// A caret right after a word selects that word. Returns an empty range
    /// at the offset when there is nothing word-like around it.
    pub fn word_at(&self, offset: usize) -> TextRange {
        let offset = offset.min(self.rope.len_chars());
        let line = self.line_containing(offset);
        let col = offset - line.start;

        let is_word = |s: &str| s.chars().any(|c| c.is_alphanumeric() || c == '_');

        let mut char_pos = 0;
        let mut previous: Option<(usize, usize, bool)> = None;
        for segment in line.text.split_word_bounds() {
            let seg_start = char_pos;
            let seg_end = seg_start + segment.chars().count();
            let word_like = is_word(segment);
            char_pos = seg_end;

            if seg_start <= col && col < seg_end {
                if word_like {
                    return TextRange::new(line.start + seg_start, line.start + seg_end);
                }
                break;
            }
            previous = Some((seg_start, seg_end, word_like));
        }

        match previous {
            Some((start, end, true)) if end == col => {
                TextRange::new(line.start + start, line.start + end)
            }
            _ => TextRange::caret(offset),
        }
    }
}

impl Default for RopeDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for RopeDocument {
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn line_containing(&self, offset: usize) -> Line {
        let index = self.line_index(offset);
        let start = self.rope.line_to_char(index);
        let text = self
            .rope
            .line(index)
            .to_string()
            .trim_end_matches(is_line_break)
            .to_string();
        let end = start + text.chars().count();

        Line { text, start, end }
    }

    fn row_col_of(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.rope.len_chars());
        let index = self.line_index(offset);
        let start = self.rope.line_to_char(index);
        (index + 1, offset - start + 1)
    }

    fn text_of_range(&self, range: TextRange) -> String {
        let len = self.rope.len_chars();
        let start = range.start.min(len);
        let end = range.end.min(len);
        self.rope.slice(start..end).to_string()
    }
}
