//! Document trait consumed by the summarizer.

use crate::{Line, TextRange};

/// Read-only view of a source document.
///
/// Offsets are character offsets. Implementations clamp offsets past the
/// end of the document to its last position instead of failing.
pub trait Document {
    /// Total number of characters.
    fn len_chars(&self) -> usize;

    /// Line containing the given offset.
    fn line_containing(&self, offset: usize) -> Line;

    /// 1-based (row, column) of the given offset.
    fn row_col_of(&self, offset: usize) -> (usize, usize);

    /// Text covered by the range.
    fn text_of_range(&self, range: TextRange) -> String;

    /// Whole document text.
    fn text(&self) -> String {
        self.text_of_range(TextRange::new(0, self.len_chars()))
    }
}
