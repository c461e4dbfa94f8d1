//! Leveled emission API.

use serde_json::Value;
use std::backtrace::Backtrace;
use std::env;
use std::error::Error;
use std::panic::Location;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use super::color::{Color, RESET};
use super::console::{ConsoleWriter, RecordSink};
use super::event::{Fields, LogEvent, merge_fields};
use super::{Level, caller};
use crate::error::LogError;

/// Structured logger writing serialized records to a [`RecordSink`].
///
/// Every emission method is `#[track_caller]`; the recorded caller is the
/// line that invoked it, relative to the working directory captured when the
/// logger was built. A logger is safe to share across threads and tasks.
pub struct Logger {
    sink: Arc<dyn RecordSink>,
    level: AtomicU8,
    cwd: PathBuf,
}

impl Logger {
    /// Creates a logger at `Info`, capturing the current working directory.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::WorkingDir`] if the working directory cannot be read.
    pub fn new(sink: Arc<dyn RecordSink>) -> Result<Self, LogError> {
        let cwd = env::current_dir().map_err(LogError::WorkingDir)?;
        Ok(Self::with_cwd(sink, cwd))
    }

    /// Creates a logger that relativizes callers against `cwd`.
    pub fn with_cwd(sink: Arc<dyn RecordSink>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            sink,
            level: AtomicU8::new(Level::Info as u8),
            cwd: cwd.into(),
        }
    }

    /// Creates a logger rendering to stdout through a [`ConsoleWriter`].
    pub fn stdout() -> Result<Self, LogError> {
        Self::new(Arc::new(ConsoleWriter::stdout()))
    }

    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Sets the minimum level; applies to every later call from any thread.
    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::SeqCst);
    }

    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    #[track_caller]
    pub fn trace(&self, message: &str, fields: &[Fields]) {
        if self.enabled(Level::Trace) {
            self.emit(Level::Trace, message, merge_fields(fields));
        }
    }

    #[track_caller]
    pub fn debug(&self, message: &str, fields: &[Fields]) {
        if self.enabled(Level::Debug) {
            self.emit(Level::Debug, message, merge_fields(fields));
        }
    }

    #[track_caller]
    pub fn info(&self, message: &str, fields: &[Fields]) {
        if self.enabled(Level::Info) {
            self.emit(Level::Info, message, merge_fields(fields));
        }
    }

    /// Logs at `Warn`. A merged field `"stack": true` also prints a raw stack
    /// trace to the console.
    #[track_caller]
    pub fn warn(&self, message: &str, fields: &[Fields]) {
        if !self.enabled(Level::Warn) {
            return;
        }

        let merged = merge_fields(fields);
        let with_stack = merged.get("stack") == Some(&Value::Bool(true));

        self.emit(Level::Warn, message, merged);

        if with_stack {
            self.print_stack(Color::Yellow);
        }
    }

    /// Logs at `Error` with `err` under the `"error"` key, then always prints a
    /// raw stack trace to the console.
    #[track_caller]
    pub fn error(&self, err: &dyn Error, message: &str, fields: &[Fields]) {
        if !self.enabled(Level::Error) {
            return;
        }

        let mut merged = merge_fields(fields);
        merged.insert("error".to_string(), Value::String(err.to_string()));

        self.emit(Level::Error, message, merged);
        self.print_stack(Color::Red);
    }

    /// Logs at `Error` without a cause or stack trace.
    #[track_caller]
    pub fn error_msg(&self, message: &str, fields: &[Fields]) {
        if self.enabled(Level::Error) {
            self.emit(Level::Error, message, merge_fields(fields));
        }
    }

    /// Logs at `Fatal`, then exits the process with status 1.
    #[track_caller]
    pub fn fatal(&self, message: &str, fields: &[Fields]) -> ! {
        if self.enabled(Level::Fatal) {
            self.emit(Level::Fatal, message, merge_fields(fields));
        }

        std::process::exit(1)
    }

    /// Logs at `Panic`, then panics with `message`.
    #[track_caller]
    pub fn panic(&self, message: &str, fields: &[Fields]) -> ! {
        if self.enabled(Level::Panic) {
            self.emit(Level::Panic, message, merge_fields(fields));
        }

        panic!("{message}")
    }

    #[track_caller]
    fn emit(&self, level: Level, message: &str, fields: Fields) {
        let caller = caller::resolve(Location::caller(), &self.cwd);
        let event = LogEvent::new(level, message, caller, fields);

        let written = event
            .to_record()
            .and_then(|record| Ok(self.sink.write_record(&record)?));

        if let Err(err) = written {
            report_write_failure(&err);
        }
    }

    fn print_stack(&self, color: Color) {
        let stack = Backtrace::force_capture();
        let text = format!("{} {} {}\n", color.ansi(), stack, RESET);

        if let Err(err) = self.sink.write_raw(&text) {
            report_write_failure(&LogError::Io(err));
        }
    }
}

fn report_write_failure(err: &LogError) {
    eprintln!("logger: could not write event: {err}");
}
