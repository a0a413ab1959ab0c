//! Core types and traits for linefind.
//!
//! This crate provides the abstractions the summarizer works against
//! (documents, match providers, report surfaces) without coupling it to
//! any concrete editor, buffer or terminal.

pub mod document;
pub mod flash;
pub mod range;
pub mod search;
pub mod surface;

pub use document::Document;
pub use flash::{FlashGeneration, FlashToken};
pub use range::{Line, TextRange};
pub use search::{MatchProvider, SearchOptions};
pub use surface::ReportSurface;
