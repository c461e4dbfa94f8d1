//! HTTP server runtime.

use crate::config::Config;
use crate::fields;
use crate::logging::Logger;
use crate::routes::app_router;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

/// Binds the listener and serves requests until the server stops.
///
/// # Errors
///
/// Returns an error if:
/// - `listen_addr` is not a socket address
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config, logger: Arc<Logger>) -> Result<()> {
    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    let app = app_router(&config.file_root, logger.clone());

    logger.info(
        &format!("Server running on : {}", addr.port()),
        &[fields! { "root" => config.file_root.display().to_string() }],
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
