//! Rope-backed source document for linefind.
//!
//! Provides the [`Document`](linefind_core::Document) implementation used
//! by the command-line front end, along with pattern derivation from a
//! selection or the word under the caret.

mod document;
mod selection;

pub use document::RopeDocument;
pub use selection::{pattern_from_selection, PatternRules, SelectionPattern};
