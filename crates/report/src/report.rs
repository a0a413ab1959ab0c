//! Generated report and its builder.

use anyhow::Result;

use linefind_core::{ReportSurface, TextRange};

use crate::{Header, Jump, JumpEntry, JumpIndex, JumpTarget};

/// One match (or selection) rendered on a report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSpan {
    /// Start inside the report line, in characters
    pub offset: usize,
    /// Highlighted length; zero when the match was cut off by truncation
    pub len: usize,
    /// Source range the span stands for
    pub source: TextRange,
}

/// A body line of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    /// 1-based row of the line's first match
    pub row: usize,
    /// 1-based column of the line's first match
    pub col: usize,
    /// Emitted text: coordinates followed by the line content
    pub text: String,
    pub spans: Vec<SourceSpan>,
}

/// Summary of a set of matches, ready to publish.
///
/// Immutable once built; a new search produces a new report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    header: String,
    body: Vec<ReportLine>,
    text: String,
    len_chars: usize,
    highlights: Vec<TextRange>,
    jump_index: JumpIndex,
}

impl Report {
    /// Stat line.
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn body(&self) -> &[ReportLine] {
        &self.body
    }

    /// Header and body lines joined with `\n`, no trailing line break.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of [`Report::text`] in characters.
    pub fn len_chars(&self) -> usize {
        self.len_chars
    }

    /// Ranges of the report text to highlight, in text order.
    pub fn highlights(&self) -> &[TextRange] {
        &self.highlights
    }

    pub fn jump_index(&self) -> &JumpIndex {
        &self.jump_index
    }

    /// Source range behind a report offset.
    pub fn resolve(&self, offset: usize) -> Option<Jump> {
        self.jump_index.resolve(offset)
    }

    /// Write the report to a surface and lock it.
    pub fn publish(&self, surface: &mut dyn ReportSurface, style: &str) -> Result<()> {
        surface.set_read_only(false);
        surface.append(&self.text)?;
        surface.set_read_only(true);
        surface.mark_highlights(&self.highlights, style);
        Ok(())
    }
}

/// How finely a body line maps back to the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Granularity {
    /// One entry for the whole line
    Line,
    /// One entry per span, the last one running to the end of the line
    Span,
}

/// Accumulates report text with its highlights and jump entries.
pub(crate) struct ReportBuilder {
    header: String,
    body: Vec<ReportLine>,
    text: String,
    len_chars: usize,
    highlights: Vec<TextRange>,
    jump_index: JumpIndex,
}

impl ReportBuilder {
    pub(crate) fn new(header: &Header) -> Self {
        let len_chars = header.stat.chars().count();
        let mut highlights = Vec::new();
        let mut jump_index = JumpIndex::new();

        if let Some(emphasis) = header.emphasis {
            let emphasis =
                TextRange::new(emphasis.start.min(len_chars), emphasis.end.min(len_chars));
            if !emphasis.is_empty() {
                highlights.push(emphasis);
            }
        }

        if let Some(origin) = header.origin {
            jump_index.push(JumpEntry {
                report: TextRange::new(0, len_chars),
                source: origin,
                target: JumpTarget::Header,
            });
        }

        Self {
            header: header.stat.clone(),
            body: Vec::new(),
            text: header.stat.clone(),
            len_chars,
            highlights,
            jump_index,
        }
    }

    pub(crate) fn push_line(&mut self, line: ReportLine, granularity: Granularity) {
        self.text.push('\n');
        self.len_chars += 1;

        let line_start = self.len_chars;
        let line_len = line.text.chars().count();
        let line_end = line_start + line_len;
        self.text.push_str(&line.text);
        self.len_chars = line_end;

        let index = self.body.len();
        for span in &line.spans {
            debug_assert!(span.offset + span.len <= line_len, "span outside its line");
            if span.len > 0 {
                let start = (line_start + span.offset).min(line_end);
                let end = (start + span.len).min(line_end);
                self.highlights.push(TextRange::new(start, end));
            }
        }

        let target = JumpTarget::Body { line: index };
        match granularity {
            Granularity::Line => {
                if let Some(first) = line.spans.first() {
                    self.jump_index.push(JumpEntry {
                        report: TextRange::new(line_start, line_end),
                        source: first.source,
                        target,
                    });
                }
            }
            Granularity::Span => {
                let mut previous_end = line_start;
                let last = line.spans.len().saturating_sub(1);
                for (k, span) in line.spans.iter().enumerate() {
                    let end = if k == last {
                        line_end
                    } else {
                        (line_start + span.offset + span.len)
                            .max(previous_end)
                            .min(line_end)
                    };
                    self.jump_index.push(JumpEntry {
                        report: TextRange::new(previous_end, end),
                        source: span.source,
                        target,
                    });
                    previous_end = end;
                }
            }
        }

        self.body.push(line);
    }

    pub(crate) fn finish(self) -> Report {
        Report {
            header: self.header,
            body: self.body,
            text: self.text,
            len_chars: self.len_chars,
            highlights: self.highlights,
            jump_index: self.jump_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockSurface;

    fn span(offset: usize, len: usize, source: usize) -> SourceSpan {
        SourceSpan {
            offset,
            len,
            source: TextRange::new(source, source + len),
        }
    }

    #[test]
    fn test_builder_joins_lines() {
        let mut builder = ReportBuilder::new(&Header::new("stat"));
        builder.push_line(
            ReportLine {
                row: 1,
                col: 1,
                text: "1:1   abc".to_string(),
                spans: vec![span(6, 3, 0)],
            },
            Granularity::Line,
        );
        let report = builder.finish();

        assert_eq!(report.text(), "stat\n1:1   abc");
        assert_eq!(report.len_chars(), 14);
        assert_eq!(report.highlights(), &[TextRange::new(11, 14)]);
        assert_eq!(
            report.jump_index().entries()[0].report,
            TextRange::new(5, 14)
        );
    }

    #[test]
    fn test_header_origin_and_emphasis() {
        let header = Header {
            stat: "hdr".to_string(),
            origin: Some(TextRange::new(40, 43)),
            emphasis: Some(TextRange::new(1, 10)),
        };
        let report = ReportBuilder::new(&header).finish();

        // Emphasis clamped to the header
        assert_eq!(report.highlights(), &[TextRange::new(1, 3)]);
        let jump = report.resolve(2).unwrap();
        assert_eq!(jump.target, JumpTarget::Header);
        assert_eq!(jump.source, TextRange::new(40, 43));
        assert_eq!(report.resolve(3), None);
    }

    #[test]
    fn test_span_granularity_extends_last_entry() {
        let mut builder = ReportBuilder::new(&Header::new("h"));
        builder.push_line(
            ReportLine {
                row: 1,
                col: 1,
                text: "1:1   ab ab ab".to_string(),
                spans: vec![span(6, 2, 0), span(9, 2, 3)],
            },
            Granularity::Span,
        );
        let report = builder.finish();

        let entries = report.jump_index().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].report, TextRange::new(2, 10));
        assert_eq!(entries[1].report, TextRange::new(10, 16));
    }

    #[test]
    fn test_publish() {
        let mut builder = ReportBuilder::new(&Header::new("1 selection"));
        builder.push_line(
            ReportLine {
                row: 3,
                col: 2,
                text: "3:2   xyz".to_string(),
                spans: vec![span(6, 3, 10)],
            },
            Granularity::Line,
        );
        let report = builder.finish();

        let mut surface = MockSurface::default();
        report.publish(&mut surface, "region.bluish").unwrap();

        assert_eq!(surface.text, report.text());
        assert!(surface.read_only);
        assert_eq!(surface.style, "region.bluish");
        assert_eq!(surface.highlights, report.highlights());
        // Locked after publishing
        assert!(surface.append("more").is_err());
    }
}
