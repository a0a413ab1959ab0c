//! Output surface the report is published to.

use anyhow::Result;

use crate::TextRange;

/// A text surface that displays a generated report.
///
/// Mirrors an editor output panel: text is appended while the surface is
/// writable, highlighted ranges carry a style tag, and clicks are turned
/// back into text offsets.
pub trait ReportSurface {
    /// Append text at the end of the surface.
    ///
    /// Fails while the surface is read-only.
    fn append(&mut self, text: &str) -> Result<()>;

    /// Replace the highlighted ranges, drawn with the given style tag.
    fn mark_highlights(&mut self, ranges: &[TextRange], style: &str);

    /// Toggle read-only mode.
    fn set_read_only(&mut self, read_only: bool);

    /// Convert a 0-based (row, column) position into a text offset.
    fn offset_at(&self, row: usize, col: usize) -> Option<usize>;
}
