//! Display formatting shared by all conversions

use chrono::{DateTime, NaiveDateTime, TimeZone};
use std::fmt::Display;

/// The one format every timestamp is rendered in: `2023-01-01 12:00:00`
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format an aware date/time in its own offset
pub fn format_datetime<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    dt.format(DISPLAY_FORMAT).to_string()
}

/// Format a naive (zone-less) date/time
pub fn format_naive(dt: &NaiveDateTime) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}
