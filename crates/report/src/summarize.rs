//! Summarizer: match ranges to report.

use linefind_config::{DisplaySettings, Grouping};
use linefind_core::{Document, Line, TextRange};

use crate::format::{coordinate_prefix, digits, LineContent};
use crate::report::{Granularity, ReportBuilder};
use crate::{Header, Report, ReportLine, SourceSpan};

/// Layout options for one summarize call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    pub grouping: Grouping,
    /// Emit lines verbatim instead of stripping whitespace (per-row only)
    pub keep_indent: bool,
    /// Longest content before truncation, ellipsis included
    pub max_line_length: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self::from(&DisplaySettings::default())
    }
}

impl From<&DisplaySettings> for SummaryOptions {
    fn from(settings: &DisplaySettings) -> Self {
        Self {
            grouping: settings.grouping,
            keep_indent: settings.keep_indent,
            max_line_length: settings.max_line_length,
        }
    }
}

/// A match with its 1-based coordinates.
#[derive(Debug, Clone, Copy)]
struct Located {
    range: TextRange,
    row: usize,
    col: usize,
}

/// Matches sharing one row.
struct RowGroup {
    row: usize,
    col: usize,
    line: Line,
    members: Vec<Located>,
}

/// Summarize `matches` (in document order) into a report.
///
/// Without a header the stat line counts the ranges as selections.
/// Per-row grouping expects the ranges sorted by position: unsorted input
/// is not reordered, so a row can show up more than once.
pub fn summarize(
    document: &dyn Document,
    matches: &[TextRange],
    header: Option<Header>,
    options: &SummaryOptions,
) -> Report {
    let header = header.unwrap_or_else(|| Header::selections(matches.len()));
    let located: Vec<Located> = matches
        .iter()
        .map(|range| {
            let (row, col) = document.row_col_of(range.start);
            Located {
                range: *range,
                row,
                col,
            }
        })
        .collect();

    let report = match options.grouping {
        Grouping::PerMatch => summarize_per_match(document, &located, &header, options),
        Grouping::PerRow => summarize_per_row(document, &located, &header, options),
    };

    linefind_logger::debug(format!(
        "Summarized {} ranges into {} lines ({:?})",
        matches.len(),
        report.body().len(),
        options.grouping
    ));

    report
}

fn summarize_per_match(
    document: &dyn Document,
    located: &[Located],
    header: &Header,
    options: &SummaryOptions,
) -> Report {
    let row_width = digits(located.iter().map(|m| m.row).max().unwrap_or(0));
    let col_width = digits(located.iter().map(|m| m.col).max().unwrap_or(0));

    let mut builder = ReportBuilder::new(header);
    for m in located {
        let line = document.line_containing(m.range.start);
        let content = LineContent::new(&line.text, false, options.max_line_length);
        let prefix = coordinate_prefix(m.row, m.col, row_width, col_width);

        let (start, len) = content.project(m.range.start.saturating_sub(line.start), m.range.len());
        let span = SourceSpan {
            offset: prefix.chars().count() + start,
            len,
            source: m.range,
        };

        builder.push_line(
            ReportLine {
                row: m.row,
                col: m.col,
                text: prefix + &content.text,
                spans: vec![span],
            },
            Granularity::Line,
        );
    }

    builder.finish()
}

fn summarize_per_row(
    document: &dyn Document,
    located: &[Located],
    header: &Header,
    options: &SummaryOptions,
) -> Report {
    let mut groups: Vec<RowGroup> = Vec::new();
    for m in located {
        match groups.last_mut() {
            Some(group) if group.row == m.row => group.members.push(*m),
            _ => groups.push(RowGroup {
                row: m.row,
                col: m.col,
                line: document.line_containing(m.range.start),
                members: vec![*m],
            }),
        }
    }

    let row_width = digits(groups.iter().map(|g| g.row).max().unwrap_or(0));
    let col_width = digits(located.iter().map(|m| m.col).max().unwrap_or(0));

    let mut builder = ReportBuilder::new(header);
    for group in groups {
        let content = LineContent::new(
            &group.line.text,
            options.keep_indent,
            options.max_line_length,
        );
        let prefix = coordinate_prefix(group.row, group.col, row_width, col_width);
        let prefix_width = prefix.chars().count();

        let spans = group
            .members
            .iter()
            .map(|m| {
                let (start, len) =
                    content.project(m.range.start.saturating_sub(group.line.start), m.range.len());
                SourceSpan {
                    offset: prefix_width + start,
                    len,
                    source: m.range,
                }
            })
            .collect();

        builder.push_line(
            ReportLine {
                row: group.row,
                col: group.col,
                text: prefix + &content.text,
                spans,
            },
            Granularity::Span,
        );
    }

    builder.finish()
}
