//! Tracing subscriber setup
//!
//! This module provides the tracing configuration shared by the `lsi` and
//! `mkdiri` binaries and by tests. Stdout carries the listing, so log output
//! goes to a file or to stderr.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Level used when `RUST_LOG` is unset or unparsable
pub const DEFAULT_LEVEL: &str = "warn";

/// `RUST_LOG`, falling back to [`DEFAULT_LEVEL`]
pub fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Initialize the global tracing subscriber.
///
/// Logs go to `log_file_path` when given (truncated first), otherwise to
/// stderr.
pub fn init_global(log_file_path: Option<&Path>) -> std::io::Result<()> {
    match log_file_path {
        Some(path) => {
            let log_file = File::create(path)?;
            build_subscriber(Arc::new(log_file), default_filter()).init();
        }
        None => build_subscriber(std::io::stderr, default_filter()).init(),
    }
    Ok(())
}

/// Build a subscriber writing plain-text events to `writer`.
///
/// This is the core subscriber configuration shared between the binaries and
/// tests.
pub fn build_subscriber<W>(writer: W, env_filter: EnvFilter) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
}
