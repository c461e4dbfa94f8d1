//! # Request Logger
//!
//! Colorized structured console logging paired with an HTTP request logging
//! middleware for Axum.
//!
//! ## Architecture
//!
//! - **Logging** ([`logging`]) - Leveled [`Logger`], field merging, caller
//!   resolution and the console renderer
//! - **Middleware** ([`middleware`]) - Per-request capture and response status
//!   observation
//! - **Server** ([`server`], [`routes`]) - Static file serving behind the
//!   request logger
//!
//! ## Output
//!
//! Every event becomes one line on stdout:
//!
//! ```text
//! [4211] 2024-05-01 12:00:00 INFO Request Information (duration = 5ms, method = GET, ...) src/middleware/request_log.rs:63
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod error;
pub mod logging;
pub mod middleware;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::LogError;
pub use logging::Logger;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::error::LogError;
    pub use crate::fields;
    pub use crate::logging::{ConsoleWriter, Fields, Level, Logger, RecordSink};
    pub use crate::middleware::ResponseCapture;
}
