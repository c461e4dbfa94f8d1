//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /file/*` - Static files from the configured root (prefix stripped)
//!
//! # Middleware
//!
//! - **Request logging** - One `Info` event per request, applied outermost

use crate::logging::Logger;
use crate::middleware::request_log;
use axum::{Router, middleware};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Constructs the application router.
///
/// # Arguments
///
/// - `file_root` - directory served under `/file/`
/// - `logger` - receives one event per handled request
pub fn app_router(file_root: &Path, logger: Arc<Logger>) -> Router {
    Router::new()
        .nest_service("/file", ServeDir::new(file_root))
        .layer(middleware::from_fn_with_state(logger, request_log::layer))
}
