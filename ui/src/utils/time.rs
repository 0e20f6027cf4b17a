use jiff::{Timestamp, tz::TimeZone};

/// Timestamp in the browser's timezone, e.g. "05 Mar 2025 14:30".
pub fn format_timestamp(timestamp: Timestamp) -> String {
    timestamp
        .to_zoned(TimeZone::system())
        .strftime("%d %b %Y %H:%M")
        .to_string()
}

pub fn today() -> jiff::civil::Date {
    jiff::Zoned::now().date()
}
