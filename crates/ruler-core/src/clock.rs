//! Seconds-of-day helpers for the time ruler.

/// Seconds in one day, the upper bound of the time axis.
pub const SECONDS_PER_DAY: u32 = 24 * 3600;

/// `HH:mm`, e.g. `"07:05"`. The end of the day prints as `"24:00"`.
pub fn format_hh_mm(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = seconds % 3600 / 60;
    format!("{hours:02}:{minutes:02}")
}

/// `HH:mm:ss`, e.g. `"07:05:09"`.
pub fn format_hh_mm_ss(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = seconds % 3600 / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}
