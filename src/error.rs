//! Error types for the logging subsystem.

use std::io;

/// Errors raised while building a logger or writing an event.
///
/// Logging calls themselves never return these to the caller; a failed write
/// is reported on stderr and the event is discarded.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("unknown log level: '{0}'")]
    UnknownLevel(String),

    #[error("failed to resolve working directory")]
    WorkingDir(#[source] io::Error),

    #[error("failed to serialize log record")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write log output")]
    Io(#[from] io::Error),
}
