//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:4000`)
//! - `LOG_LEVEL` - Minimum log level (default: `info`)
//! - `FILE_ROOT` - Directory served under `/file/` (default: `files`)
//!
//! Command-line flags take priority over the environment; see
//! [`Config::apply_overrides`].

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::fields;
use crate::logging::{Level, Logger};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: Level,
    /// Directory whose files are served under `/file/`.
    pub file_root: PathBuf,
}

/// Values given on the command line; each one replaces its environment value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub listen_addr: Option<String>,
    pub log_level: Option<String>,
    pub file_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `LOG_LEVEL` is not a known level name.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:4000".to_string());

        let log_level = env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .parse::<Level>()
            .context("Invalid LOG_LEVEL")?;

        let file_root = env::var("FILE_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("files"));

        Ok(Self {
            listen_addr,
            log_level,
            file_root,
        })
    }

    /// Replaces environment values with those given on the command line.
    ///
    /// # Errors
    ///
    /// Returns an error if the overriding log level is not a known level name.
    pub fn apply_overrides(mut self, overrides: Overrides) -> Result<Self> {
        if let Some(listen_addr) = overrides.listen_addr {
            self.listen_addr = listen_addr;
        }

        if let Some(level) = overrides.log_level {
            self.log_level = level.parse::<Level>().context("Invalid --log-level")?;
        }

        if let Some(file_root) = overrides.file_root {
            self.file_root = file_root;
        }

        Ok(self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` form
    /// - `file_root` is empty
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.file_root.as_os_str().is_empty() {
            anyhow::bail!("FILE_ROOT must not be empty");
        }

        Ok(())
    }

    /// Logs the effective configuration.
    pub fn print_summary(&self, logger: &Logger) {
        logger.info(
            "Configuration loaded",
            &[fields! {
                "listen" => self.listen_addr.as_str(),
                "log_level" => self.log_level,
                "file_root" => self.file_root.display().to_string(),
            }],
        );
    }
}

/// Loads, overrides and validates configuration.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load(overrides: Overrides) -> Result<Config> {
    let config = Config::from_env()?.apply_overrides(overrides)?;
    config.validate()?;
    Ok(config)
}
