//! SQL implementation of the reservation log

use crate::error::DbError;
use crate::repositories::reservation_log::{decode_cell, encode_cell, ReservationLogRepository};
use crate::DbClient;
use reservify_common::models::{CellValue, LogRow, ReservationRecord};
use reservify_common::services::{BoxFuture, LogStoreError, ReservationLog};
use sqlx::Row;
use tracing::{debug, error, info};

/// SQL implementation of the reservation log
#[derive(Debug, Clone)]
pub struct SqlReservationLogRepository {
    db_client: DbClient,
}

impl SqlReservationLogRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }

    #[allow(clippy::too_many_arguments)]
    async fn insert_columns(
        &self,
        created_at: &str,
        email: &str,
        facility: &str,
        name: &str,
        contact: &str,
        start: &CellValue,
        end_time: &str,
        note: &str,
    ) -> Result<(), DbError> {
        let (start_kind, start_time) = encode_cell(start);

        let query = r#"
            INSERT INTO reservation_log
                (created_at, email, facility, name, contact, start_time, start_kind, end_time, note, reserved)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, '')
        "#;

        sqlx::query(query)
            .bind(created_at)
            .bind(email)
            .bind(facility)
            .bind(name)
            .bind(contact)
            .bind(start_time)
            .bind(start_kind)
            .bind(end_time)
            .bind(note)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to append reservation row: {}", e);
                DbError::QueryError(e.to_string())
            })?;
        Ok(())
    }
}

impl ReservationLogRepository for SqlReservationLogRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing reservation log schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS reservation_log (
                row_id INTEGER PRIMARY KEY AUTOINCREMENT,
                created_at TEXT NOT NULL DEFAULT '',
                email TEXT NOT NULL DEFAULT '',
                facility TEXT NOT NULL,
                name TEXT NOT NULL DEFAULT '',
                contact TEXT NOT NULL DEFAULT '',
                start_time TEXT NOT NULL DEFAULT '',
                start_kind TEXT NOT NULL DEFAULT 'empty',
                end_time TEXT NOT NULL DEFAULT '',
                note TEXT NOT NULL DEFAULT '',
                reserved TEXT NOT NULL DEFAULT ''
            )
        "#;
        self.db_client.execute(query).await?;
        self.db_client
            .execute(
                "CREATE INDEX IF NOT EXISTS reservation_log_facility ON reservation_log (facility)",
            )
            .await?;

        info!("Reservation log schema initialized successfully");
        Ok(())
    }

    async fn insert_record(&self, record: &ReservationRecord) -> Result<(), DbError> {
        debug!(
            "Appending reservation for facility {} at {}",
            record.facility, record.start_time
        );
        self.insert_columns(
            &record.created_at.to_rfc3339(),
            &record.email,
            &record.facility,
            &record.name,
            &record.contact,
            &CellValue::DateTime(record.start_time),
            &record.end_time.to_rfc3339(),
            &record.note,
        )
        .await
    }

    async fn import_row(&self, facility: &str, start: &CellValue) -> Result<(), DbError> {
        debug!("Importing {} cell for facility {}", start.kind(), facility);
        self.insert_columns("", "", facility, "", "", start, "", "")
            .await
    }

    async fn find_by_facility(&self, facility: &str) -> Result<Vec<LogRow>, DbError> {
        let query = r#"
            SELECT row_id, facility, start_time, start_kind
            FROM reservation_log
            WHERE facility = $1
            ORDER BY row_id
        "#;

        let rows = sqlx::query(query)
            .bind(facility)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to scan reservation log: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.into_iter()
            .map(|row| {
                let row_id: i64 = row.try_get("row_id")?;
                let kind: String = row.try_get("start_kind")?;
                let raw: String = row.try_get("start_time")?;
                Ok(LogRow {
                    row_id,
                    facility: row.try_get("facility")?,
                    start: decode_cell(row_id, &kind, raw),
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(|e| DbError::QueryError(e.to_string()))
    }

    async fn count_rows(&self) -> Result<i64, DbError> {
        let row = sqlx::query("SELECT COUNT(*) AS row_count FROM reservation_log")
            .fetch_one(self.db_client.pool())
            .await?;
        Ok(row.try_get("row_count")?)
    }
}

impl ReservationLog for SqlReservationLogRepository {
    fn append_row(&self, record: ReservationRecord) -> BoxFuture<'_, (), LogStoreError> {
        Box::pin(async move { Ok(self.insert_record(&record).await?) })
    }

    fn scan_rows(&self, facility: &str) -> BoxFuture<'_, Vec<LogRow>, LogStoreError> {
        let facility = facility.to_string();
        Box::pin(async move { Ok(self.find_by_facility(&facility).await?) })
    }
}
