//! Terminal colors for rendered level names.
//!
//! Colors are always emitted, whatever the output destination is.

/// Escape sequence that resets all terminal attributes.
pub const RESET: &str = "\x1b[0m";

/// Closed set of colors used by the console renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Gray,
    Blue,
    Green,
    Yellow,
    Red,
    Purple,
    /// Neutral color for levels outside the known table.
    White,
}

impl Color {
    /// ANSI foreground escape sequence for this color.
    pub fn ansi(self) -> String {
        let color: colored::Color = self.into();
        format!("\x1b[{}m", color.to_fg_str())
    }
}

impl From<Color> for colored::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::Gray => colored::Color::White,
            Color::Blue => colored::Color::Blue,
            Color::Green => colored::Color::Green,
            Color::Yellow => colored::Color::Yellow,
            Color::Red => colored::Color::Red,
            Color::Purple => colored::Color::Magenta,
            Color::White => colored::Color::BrightWhite,
        }
    }
}

/// Maps an uppercase level name to its display color.
pub fn level_color(level: &str) -> Color {
    match level {
        "TRACE" => Color::Gray,
        "DEBUG" => Color::Blue,
        "INFO" => Color::Green,
        "WARN" => Color::Yellow,
        "ERROR" => Color::Red,
        "FATAL" | "PANIC" => Color::Purple,
        _ => Color::White,
    }
}
