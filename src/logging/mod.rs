//! Structured console logging.
//!
//! A [`Logger`] merges field mappings, resolves the caller and serializes each
//! event as a JSON record. A [`RecordSink`] receives the record; the stock
//! sink, [`ConsoleWriter`], renders it as one colorized line:
//!
//! ```text
//! [<pid>] <UTC time> <LEVEL> <message> (<k = v, ...>) <path:line>
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use request_logger::{fields, logging};
//!
//! logging::info("Server running", &[fields! { "port" => 4000 }]);
//! logging::warn("disk low", &[fields! { "free_mb" => 120, "stack" => true }]);
//! logging::set_level(logging::Level::Debug);
//! ```

mod caller;
mod color;
mod console;
mod event;
mod level;
mod logger;
mod registry;

pub use color::{Color, RESET, level_color};
pub use console::{ConsoleWriter, RecordSink, render_line};
pub use event::{Fields, LogEvent, RESERVED_KEYS, merge_fields, to_field_value};
pub use level::Level;
pub use logger::Logger;
pub use registry::{
    debug, error, error_msg, fatal, global, info, init, level, panic, set_level, trace, warn,
};
