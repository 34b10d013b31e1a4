//! String coercion helpers shared by the [`EnvValue`](crate::EnvValue)
//! implementations.

use crate::error::EnvError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use std::str::FromStr;
use std::time::Duration;

/// Candidate separators for list and map values, in priority order.
pub const SEPARATORS: [&str; 4] = [",", ";", "-", " "];

/// Split on the first separator in [`SEPARATORS`] that occurs in `value`.
///
/// A value containing none of them yields a single piece.
pub fn split_list(value: &str) -> Vec<&str> {
    match SEPARATORS.iter().find(|sep| value.contains(**sep)) {
        Some(sep) => value.split(sep).collect(),
        None => vec![value],
    }
}

/// Split a map literal into `key:value` tokens.
///
/// Uses the same separator as [`split_list`]. When that separator is a space
/// and some token lacks a `:`, the spaces belong to a value and the whole
/// string is a single token (`1:Hello world`).
pub fn split_pairs(value: &str) -> Vec<&str> {
    let pieces = split_list(value);
    let spaced = !value.contains([',', ';', '-']);
    if spaced && pieces.iter().any(|p| !p.contains(':')) {
        return vec![value];
    }
    pieces
}

/// Parse a base-10 number with `FromStr`, reporting failures as
/// [`EnvError::BadFormat`].
pub fn parse_number<T>(key: &str, value: &str) -> Result<T, EnvError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| EnvError::bad_format::<T>(key, value, e))
}

/// Parse a boolean. Accepts `1 t T TRUE true True` and
/// `0 f F FALSE false False`.
pub fn parse_bool(key: &str, value: &str) -> Result<bool, EnvError> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(EnvError::bad_format::<bool>(
            key,
            value,
            "expected one of 1, t, true, 0, f, false",
        )),
    }
}

/// Parse a duration such as `10s`, `1h 30m` or `250ms`.
pub fn parse_duration(key: &str, value: &str) -> Result<Duration, EnvError> {
    humantime::parse_duration(value).map_err(|e| EnvError::parse_failure::<Duration>(key, value, e))
}

/// Parse an absolute URL. Relative references have no base to resolve
/// against and fail.
pub fn parse_url(key: &str, value: &str) -> Result<url::Url, EnvError> {
    url::Url::parse(value).map_err(|e| EnvError::parse_failure::<url::Url>(key, value, e))
}

#[derive(Debug, Clone, Copy)]
enum Layout {
    Date(&'static str),
    Time(&'static str),
    Naive(&'static str),
    Zoned(&'static str),
    Rfc3339,
    Rfc2822,
}

/// Time layouts, tried in order. Layouts without an offset are read as UTC.
const TIME_LAYOUTS: &[Layout] = &[
    Layout::Date("%Y-%m-%d"),
    Layout::Time("%H:%M:%S"),
    Layout::Naive("%Y-%m-%d %H:%M:%S"),
    Layout::Zoned("%Y-%m-%d %H:%M:%S%:z"),
    Layout::Time("%I:%M%p"),
    Layout::Rfc3339,
    Layout::Rfc2822,
    Layout::Naive("%a %b %e %H:%M:%S %Y"),
    Layout::Date("%Y/%m/%d"),
    Layout::Naive("%Y/%m/%d %H:%M:%S"),
    Layout::Naive("%a %b %e %H:%M:%S UTC %Y"),
    Layout::Zoned("%a %b %d %H:%M:%S %z %Y"),
];

impl Layout {
    fn name(self) -> &'static str {
        match self {
            Layout::Date(f) | Layout::Time(f) | Layout::Naive(f) | Layout::Zoned(f) => f,
            Layout::Rfc3339 => "RFC 3339",
            Layout::Rfc2822 => "RFC 2822",
        }
    }

    fn parse(self, value: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        let utc = |naive: NaiveDateTime| naive.and_utc().fixed_offset();
        match self {
            Layout::Date(f) => NaiveDate::parse_from_str(value, f)
                .map(|d| utc(d.and_time(NaiveTime::MIN))),
            Layout::Time(f) => NaiveTime::parse_from_str(value, f).map(|t| {
                // Time-only values land on the first day of year zero.
                utc(NaiveDate::from_ymd_opt(0, 1, 1)
                    .unwrap_or(NaiveDate::MIN)
                    .and_time(t))
            }),
            Layout::Naive(f) => NaiveDateTime::parse_from_str(value, f).map(utc),
            Layout::Zoned(f) => DateTime::parse_from_str(value, f),
            Layout::Rfc3339 => DateTime::parse_from_rfc3339(value),
            Layout::Rfc2822 => DateTime::parse_from_rfc2822(value),
        }
    }
}

/// Parse a time instant, trying every known layout in turn.
///
/// Fails with [`EnvError::TimeFormatExhausted`] carrying each layout's error.
pub fn parse_time(key: &str, value: &str) -> Result<DateTime<FixedOffset>, EnvError> {
    let mut attempts = Vec::with_capacity(TIME_LAYOUTS.len());
    for layout in TIME_LAYOUTS {
        match layout.parse(value) {
            Ok(t) => return Ok(t),
            Err(e) => attempts.push((layout.name(), e)),
        }
    }
    Err(EnvError::TimeFormatExhausted {
        key: key.to_string(),
        value: value.to_string(),
        attempts,
    })
}
