//! UTC timestamp strings used for map captions and output file names.

use chrono::{DateTime, Utc};

/// Format a timestamp as `YYYY/MM/DD HH:MM:SS UTC`.
pub fn utc_date_string(time: &DateTime<Utc>) -> String {
    time.format("%Y/%m/%d %H:%M:%S UTC").to_string()
}

/// Filesystem-safe variant of [`utc_date_string`].
///
/// Slashes become `-`, every whitespace character becomes `--` and colons
/// become `-`, e.g. `2024-03-05--07-08-09--UTC`.
pub fn filesystem_safe_utc_date_string(time: &DateTime<Utc>) -> String {
    let display = utc_date_string(time);
    let mut safe = String::with_capacity(display.len() + 4);
    for c in display.chars() {
        match c {
            '/' | ':' => safe.push('-'),
            c if c.is_whitespace() => safe.push_str("--"),
            c => safe.push(c),
        }
    }
    safe
}
