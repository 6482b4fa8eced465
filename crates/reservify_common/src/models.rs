// --- File: crates/reservify_common/src/models.rs ---

// Records that cross crate boundaries: what the reservation core writes to the
// log store, what it reads back, and what it hands to the calendar.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A committed reservation as appended to the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationRecord {
    pub created_at: DateTime<FixedOffset>,
    pub email: String,
    pub facility: String,
    pub name: String,
    pub contact: String,
    pub start_time: DateTime<FixedOffset>,
    /// Always `start_time + 1h`.
    pub end_time: DateTime<FixedOffset>,
    /// Empty when the client sent no note.
    pub note: String,
}

/// A stored start-time cell.
///
/// Rows imported from spreadsheet exports keep whatever the sheet held, so the
/// reader has to cope with native timestamps, serial day numbers and text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    DateTime(DateTime<FixedOffset>),
    /// Days since the sheet epoch, fractional part is the fraction of a day.
    Serial(f64),
    Text(String),
    Empty,
}

impl CellValue {
    /// Tag persisted next to the raw value in the SQL log; same spelling as
    /// the serde `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            CellValue::DateTime(_) => "date_time",
            CellValue::Serial(_) => "serial",
            CellValue::Text(_) => "text",
            CellValue::Empty => "empty",
        }
    }
}

impl From<DateTime<FixedOffset>> for CellValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        CellValue::DateTime(value)
    }
}

/// One row as the slot counter sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRow {
    /// Insertion position, 1-based.
    pub row_id: i64,
    pub facility: String,
    pub start: CellValue,
}

/// Data handed to the calendar for a committed reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// The start time of the event.
    pub start_time: DateTime<FixedOffset>,
    /// The end time of the event.
    pub end_time: DateTime<FixedOffset>,
    /// The summary or title of the event.
    pub summary: String,
    /// An optional description of the event.
    pub description: Option<String>,
}

/// Represents the result of a calendar event operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEventResult {
    /// The ID of the event.
    pub event_id: Option<String>,
    /// The status of the event.
    pub status: String,
}
