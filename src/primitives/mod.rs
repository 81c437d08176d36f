//! Low-level primitives and utilities
//!
//! ANSI escape handling and column-width counting shared by the
//! rendering engine and the listing pipeline.

mod ambiguous_width;
pub mod ansi;
pub mod display_width;
