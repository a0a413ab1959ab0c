//! Line formatting helpers shared by both grouping modes.

/// Marker appended to truncated lines.
pub const ELLIPSIS: &str = "...";

/// Spaces between the coordinates and the line content.
const GUTTER: &str = "   ";

/// Number of decimal digits in `n`.
pub fn digits(n: usize) -> usize {
    let mut n = n;
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

/// `row:col` prefix with the row right-aligned to `row_width` and the
/// column left-aligned to `col_width`, followed by the gutter.
pub fn coordinate_prefix(row: usize, col: usize, row_width: usize, col_width: usize) -> String {
    format!(
        "{:>rw$}:{:<cw$}{}",
        row,
        col,
        GUTTER,
        rw = row_width,
        cw = col_width
    )
}

/// Source line content as written into the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineContent {
    /// Emitted text, ellipsis included
    pub text: String,
    /// Leading characters stripped from the source line
    pub indent: usize,
    /// Characters of `text` taken from the source (before the ellipsis)
    pub visible: usize,
}

impl LineContent {
    /// Prepare a source line: strip surrounding whitespace unless
    /// `keep_indent` is set, then truncate to `max_len` characters.
    pub fn new(line: &str, keep_indent: bool, max_len: usize) -> Self {
        let (body, indent) = if keep_indent {
            (line, 0)
        } else {
            let stripped = line.trim_start();
            let indent = line[..line.len() - stripped.len()].chars().count();
            (stripped.trim_end(), indent)
        };

        let len = body.chars().count();
        if len > max_len {
            let visible = max_len.saturating_sub(ELLIPSIS.len());
            let mut text: String = body.chars().take(visible).collect();
            text.push_str(ELLIPSIS);
            Self {
                text,
                indent,
                visible,
            }
        } else {
            Self {
                text: body.to_string(),
                indent,
                visible: len,
            }
        }
    }

    /// Project a match at source column `col` (0-based, in characters) of
    /// length `len` onto the content.
    ///
    /// Returns `(start, len)` inside `text`, clipped to the visible part.
    /// A match starting in the stripped indent starts at the content start;
    /// a match past the truncation point has zero length.
    pub fn project(&self, col: usize, len: usize) -> (usize, usize) {
        let start = col.saturating_sub(self.indent).min(self.visible);
        let end = (col + len)
            .saturating_sub(self.indent)
            .min(self.visible)
            .max(start);
        (start, end - start)
    }
}

/// `"{count} {word}"` with the plural suffix unless `count == 1`.
pub fn counted(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
