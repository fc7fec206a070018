// Rust guideline compliant 2026-10-16

//! Tracing setup for the AFU-9 CLI.

use afu9_core::LogLevel;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Maps a configured log level to a tracing level.
pub fn to_tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

/// Installs the global tracing subscriber.
///
/// With a log file, events are appended as JSON lines through a background
/// writer; the returned guard must be held until exit so buffered events
/// are flushed. Without one, events go to stderr so stdout stays clean for
/// command output.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_tracing(level: LogLevel, log_file: Option<&Path>) -> std::io::Result<Option<WorkerGuard>> {
    let level = to_tracing_level(level);

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}
