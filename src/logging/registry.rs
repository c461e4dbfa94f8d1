//! Process-wide default logger.
//!
//! Convenience entry point for top-level code such as `main`. Library code
//! takes an explicit [`Logger`] instead.

use once_cell::sync::OnceCell;
use std::error::Error;
use std::sync::Arc;

use super::console::ConsoleWriter;
use super::{Fields, Level, Logger};

static GLOBAL: OnceCell<Arc<Logger>> = OnceCell::new();

/// Installs `logger` as the process-wide instance.
///
/// Must run before the first call to [`global`]; otherwise the already
/// installed instance is kept and `logger` is handed back.
pub fn init(logger: Arc<Logger>) -> Result<(), Arc<Logger>> {
    GLOBAL.set(logger)
}

/// Returns the process-wide logger, creating a stdout logger on first use.
pub fn global() -> &'static Arc<Logger> {
    GLOBAL.get_or_init(|| {
        let sink = Arc::new(ConsoleWriter::stdout());
        // Without a working directory callers are reported with absolute paths.
        let logger = Logger::new(sink.clone()).unwrap_or_else(|_| Logger::with_cwd(sink, ""));
        Arc::new(logger)
    })
}

pub fn set_level(level: Level) {
    global().set_level(level);
}

pub fn level() -> Level {
    global().level()
}

#[track_caller]
pub fn trace(message: &str, fields: &[Fields]) {
    global().trace(message, fields);
}

#[track_caller]
pub fn debug(message: &str, fields: &[Fields]) {
    global().debug(message, fields);
}

#[track_caller]
pub fn info(message: &str, fields: &[Fields]) {
    global().info(message, fields);
}

#[track_caller]
pub fn warn(message: &str, fields: &[Fields]) {
    global().warn(message, fields);
}

#[track_caller]
pub fn error(err: &dyn Error, message: &str, fields: &[Fields]) {
    global().error(err, message, fields);
}

#[track_caller]
pub fn error_msg(message: &str, fields: &[Fields]) {
    global().error_msg(message, fields);
}

#[track_caller]
pub fn fatal(message: &str, fields: &[Fields]) -> ! {
    global().fatal(message, fields)
}

#[track_caller]
pub fn panic(message: &str, fields: &[Fields]) -> ! {
    global().panic(message, fields)
}
