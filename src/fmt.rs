//! Shared formatting utilities for size display and console output

use console::Emoji;

/// Chart emoji for metrics/statistics
pub const CHART: Emoji = Emoji("📊", "~");

/// Sparkles emoji for completion/success
pub const SPARKLES: Emoji = Emoji("✨", "*");

/// Base-1024 unit names, indexed by power of 1024
const UNITS: [&str; 9] = [
    "Bytes", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB",
];

/// Format bytes as a human-readable base-1024 size string
///
/// Picks the largest unit where the scaled value is at least 1 and rounds
/// to two decimal places, trimming trailing zeros. Zero always formats as
/// `"0 Bytes"`.
///
/// # Examples
///
/// ```
/// use imgbench::fmt::format_bytes;
///
/// assert_eq!(format_bytes(0), "0 Bytes");
/// assert_eq!(format_bytes(512), "512 Bytes");
/// assert_eq!(format_bytes(1536), "1.5 KiB");
/// assert_eq!(format_bytes(1_048_576), "1 MiB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    format_bytes_with(bytes, 2)
}

/// [`format_bytes`] with an explicit decimal precision
///
/// Negative precision is clamped to zero.
pub fn format_bytes_with(bytes: u64, decimals: i32) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let dm = decimals.max(0) as usize;
    let index = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let index = index.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(index as i32);

    let fixed = format!("{value:.dm$}");
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    format!("{} {}", trimmed, UNITS[index])
}
