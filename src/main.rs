//! Static file server with per-request console logging.
//!
//! # Usage
//!
//! ```bash
//! # Serve ./files under /file/ on port 4000
//! cargo run
//!
//! # Override the environment from the command line
//! cargo run -- --listen 127.0.0.1:8080 --log-level debug --root ./public
//! ```

use clap::Parser;
use request_logger::config::{self, Overrides};
use request_logger::{Logger, fields, logging, server};
use std::path::PathBuf;
use std::sync::Arc;

/// Serves files under /file/ and logs every request to the console.
#[derive(Parser)]
#[command(name = "request-logger")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides LISTEN
    #[arg(long)]
    listen: Option<String>,

    /// Minimum log level, overrides LOG_LEVEL
    #[arg(long)]
    log_level: Option<String>,

    /// Directory served under /file/, overrides FILE_ROOT
    #[arg(long)]
    root: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let logger = match Logger::stdout() {
        Ok(logger) => {
            let logger = Arc::new(logger);
            // Nothing has logged yet, so the registry is still empty.
            let _ = logging::init(logger.clone());
            logger
        }
        Err(_) => logging::global().clone(),
    };

    match dotenvy::dotenv() {
        Ok(_) => logger.info("Environment variables loaded successfully!", &[]),
        Err(e) => logger.debug("No .env file loaded", &[fields! { "reason" => e.to_string() }]),
    }

    let overrides = Overrides {
        listen_addr: cli.listen,
        log_level: cli.log_level,
        file_root: cli.root,
    };

    let config = match config::load(overrides) {
        Ok(config) => config,
        Err(e) => logger.fatal(
            "Invalid configuration",
            &[fields! { "error" => format!("{e:#}") }],
        ),
    };

    logger.set_level(config.log_level);
    config.print_summary(&logger);

    if let Err(e) = server::run(config, logger.clone()).await {
        logger.fatal(
            "Error starting the server!",
            &[fields! { "error" => format!("{e:#}") }],
        );
    }
}
