//! Human-readable durations.

use std::time::Duration;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Formats a duration using the largest fitting unit.
///
/// Sub-second values use a single unit with trailing zeros trimmed
/// (`350ns`, `1.5µs`, `5ms`). Longer values are split into hours, minutes and
/// seconds (`2.5s`, `1m30s`, `1h0m0s`).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use request_logger::utils::duration::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(5)), "5ms");
/// assert_eq!(format_duration(Duration::from_micros(1500)), "1.5ms");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m30s");
/// ```
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();

    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < NANOS_PER_MICRO {
        return format!("{nanos}ns");
    }
    if nanos < NANOS_PER_MILLI {
        return with_fraction(nanos, NANOS_PER_MICRO, 3, "µs");
    }
    if nanos < NANOS_PER_SEC {
        return with_fraction(nanos, NANOS_PER_MILLI, 6, "ms");
    }

    let total_secs = d.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = u128::from(total_secs % 60) * NANOS_PER_SEC + u128::from(d.subsec_nanos());
    let seconds = with_fraction(seconds, NANOS_PER_SEC, 9, "s");

    match (hours, minutes) {
        (0, 0) => seconds,
        (0, m) => format!("{m}m{seconds}"),
        (h, m) => format!("{h}h{m}m{seconds}"),
    }
}

fn with_fraction(value: u128, unit: u128, digits: usize, suffix: &str) -> String {
    let whole = value / unit;
    let fraction = value % unit;

    if fraction == 0 {
        return format!("{whole}{suffix}");
    }

    let fraction = format!("{fraction:0digits$}");
    format!("{whole}.{}{suffix}", fraction.trim_end_matches('0'))
}
