// File: crates/reservify_reservations/src/time.rs
//! Time normalization and hour bucketing.
//!
//! Every timestamp the core works with is anchored in the deployment zone and
//! truncated to whole seconds. Clients send either a full timestamp or a bare
//! time of day plus a separate date; both end up here.

use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound,
    TimeZone, Timelike,
};
use chrono_tz::Tz;
use reservify_common::config_error;
use reservify_common::ReservifyError;
use reservify_config::ReservationsConfig;
use std::fmt;
use std::str::FromStr;

use crate::error::ReservationError;

/// Naive date-time forms, read as wall-clock time in the deployment zone.
pub(crate) const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

const TIME_OF_DAY_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

/// Origin of spreadsheet serial day numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialEpoch {
    /// 1899-12-30, the usual spreadsheet origin.
    Standard,
    /// 1899-12-31, used for sheets with the `en_US` locale.
    EnUs,
}

impl SerialEpoch {
    pub fn for_locale(locale: Option<&str>) -> Self {
        match locale {
            Some("en_US") => SerialEpoch::EnUs,
            _ => SerialEpoch::Standard,
        }
    }

    pub fn date(self) -> NaiveDate {
        match self {
            SerialEpoch::Standard => NaiveDate::from_ymd_opt(1899, 12, 30),
            SerialEpoch::EnUs => NaiveDate::from_ymd_opt(1899, 12, 31),
        }
        .unwrap_or(NaiveDate::MIN)
    }
}

/// Deployment-wide time settings, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSettings {
    pub zone: Tz,
    pub serial_epoch: SerialEpoch,
}

impl TimeSettings {
    pub fn new(zone: Tz) -> Self {
        Self {
            zone,
            serial_epoch: SerialEpoch::Standard,
        }
    }

    pub fn with_serial_epoch(mut self, serial_epoch: SerialEpoch) -> Self {
        self.serial_epoch = serial_epoch;
        self
    }

    /// Fails when the configured zone is not a known IANA name.
    pub fn from_config(config: &ReservationsConfig) -> Result<Self, ReservifyError> {
        let zone = Tz::from_str(config.time_zone.trim()).map_err(|e| {
            config_error(format!(
                "invalid reservations.time_zone {:?}: {}",
                config.time_zone, e
            ))
        })?;
        Ok(Self::new(zone)
            .with_serial_epoch(SerialEpoch::for_locale(config.sheet_locale.as_deref())))
    }
}

/// Anchors a wall-clock time in `zone`.
///
/// Ambiguous times (DST fall-back) take the earlier instant; times skipped by
/// a DST jump yield `None`.
pub fn localize(naive: &NaiveDateTime, zone: Tz) -> Option<DateTime<Tz>> {
    match zone.from_local_datetime(naive) {
        LocalResult::Single(at) => Some(at),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => None,
    }
}

fn localize_or_reject(naive: &NaiveDateTime, input: &str, zone: Tz) -> Result<DateTime<Tz>, ReservationError> {
    localize(naive, zone).ok_or_else(|| {
        ReservationError::InvalidTimeFormat(format!(
            "{} does not exist in time zone {}",
            input, zone
        ))
    })
}

/// Parses RFC 3339 or one of the naive local forms, without truncation.
pub(crate) fn parse_known_forms(input: &str, zone: Tz) -> Result<Option<DateTime<Tz>>, ReservationError> {
    if let Ok(at) = DateTime::parse_from_rfc3339(input) {
        return Ok(Some(at.with_timezone(&zone)));
    }
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return localize_or_reject(&naive, input, zone).map(Some);
        }
    }
    Ok(None)
}

/// Parses a client-supplied date-time string into the deployment zone.
pub fn parse_client_time(input: &str, settings: &TimeSettings) -> Result<DateTime<Tz>, ReservationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ReservationError::InvalidTimeFormat(
            "empty start time".to_string(),
        ));
    }

    match parse_known_forms(input, settings.zone)? {
        Some(at) => Ok(at.trunc_subsecs(0)),
        None => Err(ReservationError::InvalidTimeFormat(input.to_string())),
    }
}

fn parse_time_of_day(input: &str) -> Option<NaiveTime> {
    TIME_OF_DAY_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(input, format).ok())
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
}

/// Resolves the start of a reservation from the request fields.
///
/// `start_time` may be a full timestamp, or a bare `HH:MM[:SS]` that is then
/// combined with `start_date`.
pub fn resolve_start(
    start_time: &str,
    start_date: Option<&str>,
    settings: &TimeSettings,
) -> Result<DateTime<Tz>, ReservationError> {
    let start_time = start_time.trim();
    let Some(time_of_day) = parse_time_of_day(start_time) else {
        return parse_client_time(start_time, settings);
    };

    let date_input = start_date
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| {
            ReservationError::InvalidTimeFormat(format!(
                "time of day {} given without a start date",
                start_time
            ))
        })?;
    let date = parse_date(date_input).ok_or_else(|| {
        ReservationError::InvalidTimeFormat(format!("invalid start date {}", date_input))
    })?;

    let combined = date.and_time(time_of_day);
    let input = format!("{} {}", date_input, start_time);
    Ok(localize_or_reject(&combined, &input, settings.zone)?.trunc_subsecs(0))
}

/// Reservations always last exactly one hour.
pub fn end_time_for(start: &DateTime<Tz>) -> DateTime<Tz> {
    *start + Duration::hours(1)
}

/// The `(year, month, day, hour)` a timestamp falls into, in local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HourBucket {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
}

impl HourBucket {
    pub fn of<Z: TimeZone>(at: &DateTime<Z>, zone: Tz) -> Self {
        let local = at.with_timezone(&zone);
        Self {
            year: local.year(),
            month: local.month(),
            day: local.day(),
            hour: local.hour(),
        }
    }
}

impl fmt::Display for HourBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:00",
            self.year, self.month, self.day, self.hour
        )
    }
}
