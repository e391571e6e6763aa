//! Timestamp converter module for turning epoch values into dates and back
//!
//! The input is sniffed rather than parsed against a grammar:
//! - nothing typed: the current time as an epoch value
//! - five or more digits: an epoch value, shown as local and UTC time
//! - `YYYY[-MM[-DD[ HH[:MM[:SS]]]]]`: a date, shown as local and UTC epoch
//!
//! Anything else produces no results.

use std::fmt::Display;

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::format::{format_datetime, format_naive};

/// Latest year that still renders in `DISPLAY_FORMAT`
const MAX_YEAR: i32 = 9999;

/// Raw epoch values: at least five ASCII digits, nothing else
static EPOCH_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{5,}$").unwrap());

/// Dates from a bare year up to full seconds precision. Each component is
/// only allowed when the one before it is present, so an anchored match picks
/// exactly one precision.
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<year>[0-9]{4})(?:-(?P<month>[0-9]{2})(?:-(?P<day>[0-9]{2})(?:\s(?P<hour>[0-9]{2})(?::(?P<minute>[0-9]{2})(?::(?P<second>[0-9]{2}))?)?)?)?)?$",
    )
    .unwrap()
});

/// Unit epoch values are read and written in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Unit {
    #[default]
    Seconds,
    Milliseconds,
}

impl Unit {
    /// Resolve a preference string. Only `"ms"` selects milliseconds.
    pub fn from_preference(value: &str) -> Self {
        if value.trim() == "ms" {
            Unit::Milliseconds
        } else {
            Unit::Seconds
        }
    }

    /// Factor between seconds and this unit
    pub fn multiplier(self) -> i64 {
        match self {
            Unit::Seconds => 1,
            Unit::Milliseconds => 1000,
        }
    }

    /// Preference string for this unit
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Seconds => "s",
            Unit::Milliseconds => "ms",
        }
    }
}

/// How much of a date the user typed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DatePrecision {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

/// Which reading of the input a conversion represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionKind {
    /// The current time
    Now,
    /// Interpreted in (or rendered for) the local time zone
    Local,
    /// Interpreted in (or rendered for) UTC
    Utc,
}

/// A single conversion result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub kind: ConversionKind,
    /// Display label, e.g. "UTC Time: 2023-11-14 22:13:20"
    pub title: String,
    /// Secondary text shown under the label
    pub subtitle: Option<String>,
    /// The text copied when the result is activated
    pub value: String,
}

/// Interpret a query argument using the system clock and local time zone
pub fn interpret(input: Option<&str>, unit: Unit) -> Vec<Conversion> {
    interpret_at(input, unit, Utc::now(), &Local)
}

/// Interpret a query argument against an explicit clock and "local" zone
pub fn interpret_at<Tz>(
    input: Option<&str>,
    unit: Unit,
    now: DateTime<Utc>,
    local: &Tz,
) -> Vec<Conversion>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let input = input.map(str::trim).unwrap_or_default();

    if input.is_empty() {
        return vec![current_time(unit, now, local)];
    }

    if EPOCH_PATTERN.is_match(input) {
        tracing::debug!(input, "interpreting as epoch value");
        return from_epoch(input, unit, local);
    }

    match parse_date(input) {
        Some((naive, precision)) => {
            tracing::debug!(input, ?precision, "interpreting as date");
            to_epoch(&naive, unit, local)
        }
        None => Vec::new(),
    }
}

fn current_time<Tz>(unit: Unit, now: DateTime<Utc>, local: &Tz) -> Conversion
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let value = (now.timestamp() * unit.multiplier()).to_string();

    Conversion {
        kind: ConversionKind::Now,
        title: format!("Timestamp: {}", value),
        subtitle: Some(format_datetime(&now.with_timezone(local))),
        value,
    }
}

fn from_epoch<Tz>(digits: &str, unit: Unit, local: &Tz) -> Vec<Conversion>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    // Too many digits for i64 is simply not a timestamp
    let Ok(raw) = digits.parse::<i64>() else {
        return Vec::new();
    };
    let seconds = raw.div_euclid(unit.multiplier());

    let Some(utc) = Utc.timestamp_opt(seconds, 0).single() else {
        tracing::trace!(seconds, "epoch value out of range");
        return Vec::new();
    };

    let local_dt = utc.with_timezone(local);
    if utc.year() > MAX_YEAR || local_dt.year() > MAX_YEAR {
        tracing::trace!(seconds, "epoch value past year {}", MAX_YEAR);
        return Vec::new();
    }

    let local_text = format_datetime(&local_dt);
    let utc_text = format_datetime(&utc);

    vec![
        Conversion {
            kind: ConversionKind::Local,
            title: format!("Local Time: {}", local_text),
            subtitle: None,
            value: local_text,
        },
        Conversion {
            kind: ConversionKind::Utc,
            title: format!("UTC Time: {}", utc_text),
            subtitle: None,
            value: utc_text,
        },
    ]
}

fn to_epoch<Tz>(naive: &NaiveDateTime, unit: Unit, local: &Tz) -> Vec<Conversion>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let description = format_naive(naive);
    let mut results = Vec::with_capacity(2);

    let utc_seconds = Utc.from_utc_datetime(naive).timestamp();

    // Ambiguous wall-clock times take the earlier instant; skipped ones are
    // read with the offset in force before the jump
    let local_seconds = match local.from_local_datetime(naive).earliest() {
        Some(dt) => Some(dt.timestamp()),
        None => offset_before_gap(naive, local).map(|offset| utc_seconds - i64::from(offset)),
    };

    match local_seconds {
        Some(seconds) => {
            let value = (seconds * unit.multiplier()).to_string();
            results.push(Conversion {
                kind: ConversionKind::Local,
                title: format!("As Local Time: {}", value),
                subtitle: Some(description.clone()),
                value,
            });
        }
        None => tracing::trace!(%naive, "no local offset found"),
    }

    let value = (utc_seconds * unit.multiplier()).to_string();
    results.push(Conversion {
        kind: ConversionKind::Utc,
        title: format!("As UTC Time: {}", value),
        subtitle: Some(description),
        value,
    });

    results
}

/// UTC offset in seconds just before a DST gap containing `naive`
fn offset_before_gap<Tz: TimeZone>(naive: &NaiveDateTime, local: &Tz) -> Option<i32> {
    (1..=96)
        .map(|step| *naive - Duration::minutes(15 * step))
        .find_map(|earlier| local.from_local_datetime(&earlier).latest())
        .map(|dt| dt.offset().fix().local_minus_utc())
}

/// Parse a (possibly partial) date, filling missing components with their
/// minimum. Returns `None` if the text doesn't look like a date or names a
/// date/time that doesn't exist.
pub fn parse_date(input: &str) -> Option<(NaiveDateTime, DatePrecision)> {
    let caps = DATE_PATTERN.captures(input)?;

    let year: i32 = caps["year"].parse().ok()?;
    if year == 0 {
        return None;
    }

    let month = component(&caps, "month", 1)?;
    let day = component(&caps, "day", 1)?;
    let hour = component(&caps, "hour", 0)?;
    let minute = component(&caps, "minute", 0)?;
    let second = component(&caps, "second", 0)?;

    let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)?;

    Some((naive, precision(&caps)))
}

fn component(caps: &Captures<'_>, name: &str, default: u32) -> Option<u32> {
    match caps.name(name) {
        Some(m) => m.as_str().parse().ok(),
        None => Some(default),
    }
}

fn precision(caps: &Captures<'_>) -> DatePrecision {
    [
        ("second", DatePrecision::Second),
        ("minute", DatePrecision::Minute),
        ("hour", DatePrecision::Hour),
        ("day", DatePrecision::Day),
        ("month", DatePrecision::Month),
    ]
    .into_iter()
    .find(|(name, _)| caps.name(name).is_some())
    .map(|(_, p)| p)
    .unwrap_or(DatePrecision::Year)
}
