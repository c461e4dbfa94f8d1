//! Call-site resolution.
//!
//! Logging entry points are `#[track_caller]`, so the location captured here is
//! the user's call site rather than any frame inside this crate.
//!
//! Compiled-in paths are relative to the package root, so they are shown
//! unchanged even when the process runs from another directory.

use std::panic::Location;
use std::path::Path;

/// Formats `location` as `path:line`, relative to `cwd` when possible.
pub fn resolve(location: &Location<'_>, cwd: &Path) -> String {
    relativize(location.file(), location.line(), cwd)
}

/// Relative paths are kept as-is. Absolute paths outside `cwd` stay absolute.
pub fn relativize(file: &str, line: u32, cwd: &Path) -> String {
    let path = Path::new(file);

    let shown = if path.is_absolute() {
        path.strip_prefix(cwd).unwrap_or(path)
    } else {
        path
    };

    format!("{}:{}", shown.display(), line)
}
