//! Command pipelines
//!
//! `lsi` lists a directory with descriptions, `mkdiri` creates a directory or
//! file together with its description. Both take their configuration and
//! I/O handles as parameters so tests can drive them directly.

pub mod content_filter;
pub mod lsi;
pub mod mkdiri;

pub use content_filter::{Confirm, StdinConfirm};
