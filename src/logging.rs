//! File-backed tracing setup.
//!
//! The terminal belongs to the dashboard, so log records go to a file in
//! the data directory through a non-blocking writer.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Pick the filter directive: RUST_LOG wins, then --verbose, then config.
pub fn filter_directive(rust_log: Option<&str>, verbose: bool, configured: &str) -> String {
    if let Some(value) = rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        return value.to_string();
    }
    if verbose {
        return "debug".to_string();
    }
    configured.to_string()
}

/// Install the global subscriber writing to `path`. Keep the returned
/// guard alive until exit or buffered records are lost.
pub fn init(path: &Path, directive: &str) -> Result<WorkerGuard> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let file_name = path.file_name().context("log path has no file name")?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(EnvFilter::new(directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}
