//! Click handling for published reports.
//!
//! The host routes every click here with an explicit origin: clicks on a
//! summary panel are resolved against its report, anything else passes
//! through to the host's default behavior.

use std::time::Duration;

use linefind_config::DisplaySettings;
use linefind_core::{FlashGeneration, FlashToken, TextRange};

use crate::{JumpTarget, Report};

/// Identity of a source document in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub u64);

/// A published report together with the document it summarizes.
#[derive(Debug, Clone)]
pub struct SummaryPanel {
    report: Report,
    source: DocumentId,
}

impl SummaryPanel {
    pub fn new(report: Report, source: DocumentId) -> Self {
        Self { report, source }
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn source(&self) -> DocumentId {
        self.source
    }
}

/// Where a click landed.
#[derive(Debug, Clone, Copy)]
pub enum ClickOrigin<'a> {
    /// On a summary panel, at a report offset
    Summary { panel: &'a SummaryPanel, offset: usize },
    /// Anywhere else
    Other,
}

/// Host state of the summarized document at click time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceView {
    pub id: DocumentId,
    /// Currently visible source range
    pub visible: TextRange,
}

/// What the host should do after a jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    /// New caret position in the source
    pub caret: usize,
    /// Range to flash
    pub highlight: TextRange,
    /// Offset to center on, when the range is not fully visible
    pub scroll_to: Option<usize>,
    /// Token for the delayed clear
    pub token: FlashToken,
    /// Delay before clearing the flash
    pub flash_for: Duration,
    pub target: JumpTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Not a summary panel; run the host default
    PassThrough,
    /// The summarized document is gone or was replaced
    SourceChanged,
    /// Nothing under the click
    Miss,
    Jump(Navigation),
}

/// Resolves clicks and owns the flash generation.
#[derive(Debug, Clone)]
pub struct Navigator {
    generation: FlashGeneration,
    flash_for: Duration,
}

impl Navigator {
    pub fn new(flash_for: Duration) -> Self {
        Self {
            generation: FlashGeneration::new(),
            flash_for,
        }
    }

    pub fn from_settings(settings: &DisplaySettings) -> Self {
        Self::new(Duration::from_millis(settings.flash_duration_ms))
    }

    /// Handle a click.
    ///
    /// `source` is the current state of the panel's document, `None` when
    /// the host no longer has it.
    pub fn click(&mut self, origin: ClickOrigin, source: Option<SourceView>) -> ClickOutcome {
        let ClickOrigin::Summary { panel, offset } = origin else {
            return ClickOutcome::PassThrough;
        };

        let view = match source {
            Some(view) if view.id == panel.source => view,
            _ => {
                linefind_logger::warn("Summary panel source has changed");
                return ClickOutcome::SourceChanged;
            }
        };

        let Some(jump) = panel.report.resolve(offset) else {
            return ClickOutcome::Miss;
        };

        let token = self.generation.begin();
        let scroll_to = if view.visible.covers(&jump.source) {
            None
        } else {
            Some(jump.source.start)
        };

        linefind_logger::debug(format!(
            "Jump from report offset {} to {:?}",
            offset, jump.source
        ));

        ClickOutcome::Jump(Navigation {
            caret: jump.source.start,
            highlight: jump.source,
            scroll_to,
            token,
            flash_for: self.flash_for,
            target: jump.target,
        })
    }

    /// Check if the delayed clear for `token` should still run.
    pub fn should_clear(&self, token: FlashToken) -> bool {
        self.generation.should_clear(token)
    }
}
