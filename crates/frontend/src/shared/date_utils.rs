//! Utilities for date and time formatting
//!
//! Chat timestamps are shown the way `pt-BR` renders a 24-hour time of day

use chrono::NaiveDateTime;

/// Local wall-clock time of the browser (or host, in tests)
pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Format a timestamp as HH:MM, 24-hour, zero padded
/// Example: 2024-03-15T09:05:59 -> "09:05"
pub fn format_time_of_day(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%H:%M").to_string()
}
