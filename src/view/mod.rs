//! View layer
//!
//! The rich-text rendering engine: tag vocabulary, styled text, search
//! highlighting and per-item presentation.

pub mod presenter;
pub mod search_highlight;
pub mod styled_text;
pub mod theme;
