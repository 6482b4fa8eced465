// File: crates/reservify_reservations/src/slot.rs
//! Counting reservations that share a slot.
//!
//! The log may hold rows imported from spreadsheet exports, so a stored start
//! is decoded from whichever [`CellValue`] variant it arrived as. Rows that
//! cannot be decoded are logged and left out of the count.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;
use reservify_common::models::{CellValue, LogRow};
use tracing::warn;

use crate::error::ParseFallbackFailed;
use crate::time::{localize, parse_known_forms, HourBucket, TimeSettings};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Textual timestamp forms found in exported sheets, beyond the client forms.
const TEXTUAL_FORMATS: &[&str] = &[
    "%a %b %d %Y %H:%M:%S GMT%z",
    "%a %b %d %Y %H:%M:%S %z",
];

/// Month-first and long-month forms, read as local wall-clock time.
const TEXTUAL_NAIVE_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
];

const DATE_ONLY_FORMATS: &[&str] = &["%Y/%m/%d", "%m/%d/%Y"];

/// Decodes a stored start cell into the deployment zone.
pub fn decode_stored_start(
    cell: &CellValue,
    settings: &TimeSettings,
) -> Result<DateTime<Tz>, ParseFallbackFailed> {
    match cell {
        CellValue::DateTime(at) => Ok(at.with_timezone(&settings.zone)),
        CellValue::Serial(days) => decode_serial(*days, settings),
        CellValue::Text(text) => decode_text(text, settings),
        CellValue::Empty => Err(ParseFallbackFailed::new("", "empty cell")),
    }
}

/// `epoch + floor(days) days + round(fraction * 86_400_000) ms`, as local wall-clock time.
fn decode_serial(value: f64, settings: &TimeSettings) -> Result<DateTime<Tz>, ParseFallbackFailed> {
    // keeps the day arithmetic inside chrono's range
    if !value.is_finite() || value.abs() > 100_000.0 {
        return Err(ParseFallbackFailed::new(
            value.to_string(),
            "serial number out of range",
        ));
    }

    let days = value.floor();
    let millis = ((value - days) * MILLIS_PER_DAY).round() as i64;
    let epoch = settings.serial_epoch.date().and_time(chrono::NaiveTime::MIN);
    let naive = epoch + Duration::days(days as i64) + Duration::milliseconds(millis);

    localize(&naive, settings.zone).ok_or_else(|| {
        ParseFallbackFailed::new(value.to_string(), "serial time does not exist in zone")
    })
}

fn decode_text(text: &str, settings: &TimeSettings) -> Result<DateTime<Tz>, ParseFallbackFailed> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseFallbackFailed::new(text, "empty cell"));
    }

    if let Some(at) = parse_iso_date(trimmed, settings.zone) {
        return Ok(at);
    }
    if let Some(at) = parse_stored_text(trimmed, settings.zone) {
        return Ok(at);
    }
    // month-first dates such as 06-01-2024 only parse with slashes
    let slashed = trimmed.replace('-', "/");
    parse_stored_text(&slashed, settings.zone)
        .ok_or_else(|| ParseFallbackFailed::new(text, "no known date format"))
}

/// A bare `YYYY-MM-DD` date is midnight UTC, unlike the other date-only forms
/// which are local midnight.
fn parse_iso_date(text: &str, zone: Tz) -> Option<DateTime<Tz>> {
    if text.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc().with_timezone(&zone))
}

fn parse_stored_text(text: &str, zone: Tz) -> Option<DateTime<Tz>> {
    if let Ok(Some(at)) = parse_known_forms(text, zone) {
        return Some(at);
    }

    // "Sat Jun 01 2024 10:00:00 GMT+0900 (Japan Standard Time)"
    let without_zone_name = match text.find(" (") {
        Some(idx) if text.ends_with(')') => &text[..idx],
        _ => text,
    };
    for format in TEXTUAL_FORMATS {
        if let Ok(at) = DateTime::parse_from_str(without_zone_name, format) {
            return Some(at.with_timezone(&zone));
        }
    }

    for format in TEXTUAL_NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return localize(&naive, zone);
        }
    }

    DATE_ONLY_FORMATS.iter().find_map(|format| {
        NaiveDate::parse_from_str(text, format)
            .ok()
            .and_then(|date| localize(&date.and_time(NaiveTime::MIN), zone))
    })
}

/// Number of `rows` for `facility` whose start shares the hour bucket of `candidate`.
pub fn count_same_slot(
    rows: &[LogRow],
    facility: &str,
    candidate: &DateTime<Tz>,
    settings: &TimeSettings,
) -> usize {
    let bucket = HourBucket::of(candidate, settings.zone);
    rows.iter()
        .filter(|row| row.facility == facility)
        .filter_map(|row| match decode_stored_start(&row.start, settings) {
            Ok(at) => Some(at),
            Err(e) => {
                warn!(row_id = row.row_id, facility = %row.facility, "skipping row: {}", e);
                None
            }
        })
        .filter(|at| HourBucket::of(at, settings.zone) == bucket)
        .count()
}
