//! In-memory reservation log
//!
//! Used when no database is configured and as the log store in tests. Contents
//! are lost when the process exits.

use reservify_common::models::{CellValue, LogRow, ReservationRecord};
use reservify_common::services::{BoxFuture, LogStoreError, ReservationLog};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone)]
struct StoredRow {
    facility: String,
    start: CellValue,
    record: Option<ReservationRecord>,
}

#[derive(Debug, Default)]
pub struct MemoryReservationLog {
    rows: Mutex<Vec<StoredRow>>,
}

impl MemoryReservationLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn rows(&self) -> MutexGuard<'_, Vec<StoredRow>> {
        // rows are only ever pushed, a poisoned vector is still consistent
        self.rows.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }

    /// Committed reservations in insertion order. Imported raw rows are not included.
    pub fn records(&self) -> Vec<ReservationRecord> {
        self.rows()
            .iter()
            .filter_map(|row| row.record.clone())
            .collect()
    }

    /// Appends a raw spreadsheet cell, the in-memory counterpart of
    /// `ReservationLogRepository::import_row`.
    pub fn push_raw(&self, facility: &str, start: CellValue) {
        self.rows().push(StoredRow {
            facility: facility.to_string(),
            start,
            record: None,
        });
    }
}

impl ReservationLog for MemoryReservationLog {
    fn append_row(&self, record: ReservationRecord) -> BoxFuture<'_, (), LogStoreError> {
        self.rows().push(StoredRow {
            facility: record.facility.clone(),
            start: CellValue::DateTime(record.start_time),
            record: Some(record),
        });
        Box::pin(async { Ok(()) })
    }

    fn scan_rows(&self, facility: &str) -> BoxFuture<'_, Vec<LogRow>, LogStoreError> {
        let rows = self
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| row.facility == facility)
            .map(|(index, row)| LogRow {
                row_id: index as i64 + 1,
                facility: row.facility.clone(),
                start: row.start.clone(),
            })
            .collect();
        Box::pin(async move { Ok(rows) })
    }
}
