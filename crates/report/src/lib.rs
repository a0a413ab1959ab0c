//! Match summaries for linefind.
//!
//! Turns an ordered list of match ranges into a report: one line per match
//! or per row, highlight ranges inside the report text, and a jump index
//! that maps any offset of the report back to the source range it
//! summarizes.
//!
//! ```text
//! matches ─→ summarize ─→ Report { text, highlights, jump index }
//!                                              │
//!                    click offset ─→ resolve ─→ source range
//! ```

pub mod format;
mod header;
mod jump;
mod navigate;
mod report;
mod summarize;

#[cfg(test)]
mod testing;

pub use header::Header;
pub use jump::{Jump, JumpEntry, JumpIndex, JumpTarget};
pub use navigate::{
    ClickOrigin, ClickOutcome, DocumentId, Navigation, Navigator, SourceView, SummaryPanel,
};
pub use report::{Report, ReportLine, SourceSpan};
pub use summarize::{summarize, SummaryOptions};
