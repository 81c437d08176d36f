//! Filesystem-facing services
//!
//! Everything that touches the disk: listing directories, reading and
//! writing description sidecars, and log setup for the binaries.

pub mod descriptions;
pub mod fs;
#[cfg(feature = "runtime")]
pub mod tracing_setup;
