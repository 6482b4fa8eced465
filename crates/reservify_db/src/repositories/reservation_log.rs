//! Repository for the reservation log
//!
//! Rows are stored in the fixed column order
//! `created_at, email, facility, name, contact, start_time, end_time, note, reserved`,
//! plus `row_id` for insertion order and `start_kind`, the [`CellValue`] tag of
//! `start_time`. Every cell is persisted as text and typed on the way out.

use crate::error::DbError;
use chrono::DateTime;
use reservify_common::models::{CellValue, LogRow, ReservationRecord};
use tracing::debug;

/// Storage operations of the reservation log beyond the service trait.
pub trait ReservationLogRepository {
    /// Create the `reservation_log` table if it doesn't exist.
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Append a committed reservation.
    fn insert_record(
        &self,
        record: &ReservationRecord,
    ) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Append a row carried over from a spreadsheet export. Only the facility
    /// and the raw start cell are known; all other columns stay blank.
    fn import_row(
        &self,
        facility: &str,
        start: &CellValue,
    ) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Rows of one facility in insertion order.
    fn find_by_facility(
        &self,
        facility: &str,
    ) -> impl std::future::Future<Output = Result<Vec<LogRow>, DbError>> + Send;

    /// Number of rows over all facilities.
    fn count_rows(&self) -> impl std::future::Future<Output = Result<i64, DbError>> + Send;
}

/// Splits a cell into its `(start_kind, start_time)` column pair.
pub(crate) fn encode_cell(cell: &CellValue) -> (&'static str, String) {
    let raw = match cell {
        CellValue::DateTime(at) => at.to_rfc3339(),
        CellValue::Serial(days) => days.to_string(),
        CellValue::Text(text) => text.clone(),
        CellValue::Empty => String::new(),
    };
    (cell.kind(), raw)
}

/// Rebuilds a cell from its column pair.
///
/// A value that does not match its tag is handed on as text, so the slot
/// counter gets a chance to parse it (and to skip it with a warning).
pub(crate) fn decode_cell(row_id: i64, kind: &str, raw: String) -> CellValue {
    match kind {
        "date_time" => match DateTime::parse_from_rfc3339(&raw) {
            Ok(at) => CellValue::DateTime(at),
            Err(e) => {
                debug!("row {}: date cell {:?} is not RFC 3339: {}", row_id, raw, e);
                CellValue::Text(raw)
            }
        },
        "serial" => match raw.trim().parse::<f64>() {
            Ok(days) => CellValue::Serial(days),
            Err(e) => {
                debug!("row {}: serial cell {:?} is not numeric: {}", row_id, raw, e);
                CellValue::Text(raw)
            }
        },
        _ if raw.trim().is_empty() => CellValue::Empty,
        _ => CellValue::Text(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_survive_column_encoding() {
        let at = DateTime::parse_from_rfc3339("2024-06-01T10:15:00+09:00").unwrap();
        for cell in [
            CellValue::DateTime(at),
            CellValue::Serial(45444.4375),
            CellValue::Text("2024-06-01 10:15".into()),
            CellValue::Empty,
        ] {
            let (kind, raw) = encode_cell(&cell);
            assert_eq!(decode_cell(1, kind, raw), cell);
        }
    }

    #[test]
    fn mismatched_tags_fall_back_to_text() {
        assert_eq!(
            decode_cell(7, "serial", "June 1st".into()),
            CellValue::Text("June 1st".into())
        );
        assert_eq!(
            decode_cell(8, "date_time", "2024/06/01 10:00".into()),
            CellValue::Text("2024/06/01 10:00".into())
        );
        assert_eq!(decode_cell(9, "text", "  ".into()), CellValue::Empty);
    }
}
