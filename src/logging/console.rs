//! Console renderer.
//!
//! Turns one serialized record into one human-readable line:
//!
//! ```text
//! [4211] 2024-05-01 12:00:00 INFO Request Information (method = GET, status = 200) src/middleware/request_log.rs:97
//! ```
//!
//! The level name is wrapped in its color escape and a reset.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use super::color::{RESET, level_color};
use super::event::RESERVED_KEYS;

/// Destination for serialized log records.
///
/// Implementations must write each call as one unit; concurrent callers may
/// never see their output interleaved.
pub trait RecordSink: Send + Sync {
    /// Writes one serialized record.
    fn write_record(&self, record: &[u8]) -> io::Result<()>;

    /// Writes text verbatim, bypassing record parsing.
    fn write_raw(&self, text: &str) -> io::Result<()>;
}

/// Renders records to a console stream, one line per record.
pub struct ConsoleWriter<W> {
    out: Mutex<W>,
    pid: u32,
}

impl ConsoleWriter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            pid: std::process::id(),
        }
    }

    fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        out.write_all(bytes)?;
        out.flush()
    }
}

impl<W: Write + Send> RecordSink for ConsoleWriter<W> {
    fn write_record(&self, record: &[u8]) -> io::Result<()> {
        match render_line(record, self.pid) {
            Some(line) => self.write_all(line.as_bytes()),
            None => self.write_all(record),
        }
    }

    fn write_raw(&self, text: &str) -> io::Result<()> {
        self.write_all(text.as_bytes())
    }
}

/// Renders a record, or returns `None` if it is not a JSON object.
pub fn render_line(record: &[u8], pid: u32) -> Option<String> {
    let mut event: Map<String, Value> = serde_json::from_slice(record).ok()?;

    let time = event
        .get("time")
        .and_then(Value::as_str)
        .map(format_time)
        .unwrap_or_default();

    let level = event
        .get("level")
        .and_then(Value::as_str)
        .map(str::to_uppercase)
        .unwrap_or_else(|| "INFO".to_string());

    let message = event
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let caller = event
        .get("caller")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    for key in RESERVED_KEYS {
        event.remove(key);
    }

    let mut remaining: Vec<(&String, &Value)> = event.iter().collect();
    remaining.sort_by(|a, b| a.0.cmp(b.0));

    let pairs: Vec<String> = remaining
        .into_iter()
        .map(|(key, value)| format!("{key} = {}", display_value(value)))
        .collect();

    let mut line = format!(
        "[{pid}] {time} {}{level}{RESET} {message}",
        level_color(&level).ansi()
    );

    if !pairs.is_empty() {
        line.push_str(&format!(" ({})", pairs.join(", ")));
    }

    if !caller.is_empty() {
        line.push(' ');
        line.push_str(&caller);
    }

    line.push('\n');
    Some(line)
}

/// Reformats an RFC 3339 timestamp as UTC `YYYY-MM-DD HH:MM:SS`.
fn format_time(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
