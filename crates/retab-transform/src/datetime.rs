//! Date-string recognition and parsing.
//!
//! Ingestion sources mix raw date serials with locale-formatted strings. The
//! recognized string patterns are:
//!
//! - `M/D/YY` or `M/D/YYYY` (month first)
//! - `YYYY-M-D`
//! - `D-M-YY` or `D-M-YYYY` (day first)
//! - `D.M.YY` or `D.M.YYYY` (day first)
//!
//! Two-digit years are read as `20YY`. Components are validated against the
//! calendar; an out-of-range month or day is a parse failure, never rolled
//! over into the next period.

use chrono::{NaiveDate, NaiveDateTime};

/// Formats tried by [`parse_date_fallback`] for values outside the
/// recognized patterns.
const FALLBACK_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
const FALLBACK_DATE_FORMATS: &[&str] = &["%Y/%m/%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"];

/// Returns true when the value has the shape of a recognized date string.
///
/// This is a syntactic check only; the components may still fail calendar
/// validation in [`parse_date_string`].
pub fn matches_date_pattern(value: &str) -> bool {
    split_pattern(value.trim()).is_some()
}

/// Parses a recognized date string into a calendar date.
///
/// Returns `None` when the value matches no pattern or its components are not
/// a valid calendar date.
pub fn parse_date_string(value: &str) -> Option<NaiveDate> {
    let (year, month, day) = split_pattern(value.trim())?;
    build_date(year, month, day)
}

/// Last-resort parsing for values outside the recognized patterns, covering
/// common interchange formats like ISO date-times and spelled-out months.
pub fn parse_date_fallback(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    for format in FALLBACK_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed.date());
        }
    }
    for format in FALLBACK_DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(value, format) {
            return Some(parsed);
        }
    }
    None
}

/// Splits a recognized pattern into `(year, month, day)` component strings.
fn split_pattern(value: &str) -> Option<(&str, &str, &str)> {
    if let Some((month, day, year)) = split3(value, '/') {
        if is_day_or_month(month) && is_day_or_month(day) && is_year(year) {
            return Some((year, month, day));
        }
        return None;
    }
    if let Some((first, second, third)) = split3(value, '-') {
        if first.len() == 4 && is_digits(first) && is_day_or_month(second) && is_day_or_month(third)
        {
            return Some((first, second, third));
        }
        if is_day_or_month(first) && is_day_or_month(second) && is_year(third) {
            return Some((third, second, first));
        }
        return None;
    }
    if let Some((day, month, year)) = split3(value, '.') {
        if is_day_or_month(day) && is_day_or_month(month) && is_year(year) {
            return Some((year, month, day));
        }
    }
    None
}

fn split3(value: &str, separator: char) -> Option<(&str, &str, &str)> {
    let mut parts = value.splitn(3, separator);
    let first = parts.next()?;
    let second = parts.next()?;
    let third = parts.next()?;
    Some((first, second, third))
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn is_day_or_month(value: &str) -> bool {
    is_digits(value) && value.len() <= 2
}

fn is_year(value: &str) -> bool {
    is_digits(value) && (value.len() == 2 || value.len() == 4)
}

fn build_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let mut year_number: i32 = year.parse().ok()?;
    if year.len() == 2 {
        year_number += 2000;
    }
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(year_number, month, day)
}
