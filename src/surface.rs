//! Terminal report surface.

use anyhow::{bail, Result};
use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::Write;

use linefind_core::{ReportSurface, TextRange};

/// Map a highlight style tag to a terminal color.
///
/// Tags follow the `region.<color>ish` naming; unknown tags fall back to
/// magenta.
pub fn style_color(tag: &str) -> Color {
    let name = tag.strip_prefix("region.").unwrap_or(tag);
    match name {
        "redish" => Color::Red,
        "orangish" => Color::DarkYellow,
        "yellowish" => Color::Yellow,
        "greenish" => Color::Green,
        "cyanish" => Color::Cyan,
        "bluish" => Color::Blue,
        "purplish" | "pinkish" => Color::Magenta,
        _ => Color::Magenta,
    }
}

/// Report surface that buffers text and renders it with crossterm.
#[derive(Debug)]
pub struct TerminalSurface {
    text: String,
    highlights: Vec<TextRange>,
    color: Color,
    read_only: bool,
    styled: bool,
}

impl TerminalSurface {
    /// Create a surface; `styled` controls whether highlights are colored.
    pub fn new(styled: bool) -> Self {
        Self {
            text: String::new(),
            highlights: Vec::new(),
            color: Color::Magenta,
            read_only: false,
            styled,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Write the buffered report, highlights included, followed by a newline.
    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = 0;

        if self.styled {
            for range in &self.highlights {
                let start = range.start.clamp(pos, chars.len());
                let end = range.end.clamp(start, chars.len());
                queue!(
                    out,
                    Print(chars[pos..start].iter().collect::<String>()),
                    SetForegroundColor(self.color),
                    SetAttribute(Attribute::Bold),
                    Print(chars[start..end].iter().collect::<String>()),
                    SetAttribute(Attribute::Reset),
                    ResetColor
                )?;
                pos = end;
            }
        }

        queue!(out, Print(chars[pos..].iter().collect::<String>()), Print("\n"))?;
        out.flush()?;
        Ok(())
    }
}

impl ReportSurface for TerminalSurface {
    fn append(&mut self, text: &str) -> Result<()> {
        if self.read_only {
            bail!("Report surface is read-only");
        }
        self.text.push_str(text);
        Ok(())
    }

    fn mark_highlights(&mut self, ranges: &[TextRange], style: &str) {
        self.highlights = ranges.to_vec();
        self.highlights.sort_by_key(|r| r.start);
        self.color = style_color(style);
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Past the end of a row clamps to the row's end.
    fn offset_at(&self, row: usize, col: usize) -> Option<usize> {
        let mut offset = 0;
        for (i, line) in self.text.split('\n').enumerate() {
            let len = line.chars().count();
            if i == row {
                return Some(offset + col.min(len));
            }
            offset += len + 1;
        }
        None
    }
}
