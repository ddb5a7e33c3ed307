//! Human-readable byte counts.

use crate::op::ParseError;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Render a byte count in base-1024 units.
///
/// The sign is dropped, so `-2048` reads the same as `2048`. Anything past
/// the terabyte range stays in TB.
///
/// ```
/// use treenav::size::format_size;
///
/// assert_eq!(format_size(0u64), "0 B");
/// assert_eq!(format_size(2500u64), "2.44 KB");
/// assert_eq!(format_size(1_048_576u64), "1.00 MB");
/// ```
pub fn format_size(bytes: impl Into<i128>) -> String {
    let bytes = bytes.into().unsigned_abs();
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut scaled = bytes as f64;
    let mut unit = 0;
    while scaled >= 1024.0 && unit < UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", scaled, UNITS[unit])
}

/// Parse a byte count given on the command line.
pub fn parse_size(arg: &str) -> Result<i128, ParseError> {
    arg.trim()
        .parse()
        .map_err(|_| ParseError::InvalidSize(arg.to_owned()))
}
