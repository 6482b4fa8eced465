//! Reservation log storage for Reservify
//!
//! The reservation log is an append-only sequence of rows. This crate provides
//! two implementations of [`reservify_common::services::ReservationLog`]:
//!
//! - [`SqlReservationLogRepository`]: a `reservation_log` table behind a
//!   database-agnostic SQLx `Any` pool (SQLite by default, PostgreSQL and
//!   MySQL through feature flags)
//! - [`MemoryReservationLog`]: a process-local vector for development and tests
//!
//! # Example
//!
//! ```rust,no_run
//! use reservify_db::{DbClient, ReservationLogRepository, SqlReservationLogRepository};
//!
//! async fn setup_log() -> Result<SqlReservationLogRepository, Box<dyn std::error::Error>> {
//!     let db_client = DbClient::from_url("sqlite://data/reservations.db").await?;
//!     let log = SqlReservationLogRepository::new(db_client);
//!     log.init_schema().await?;
//!     Ok(log)
//! }
//! ```

pub mod client;
pub mod error;
pub mod repositories;
pub mod repository;

pub use client::DbClient;
pub use error::DbError;
pub use repository::RepositoryFactory;

pub use repositories::{
    MemoryReservationLog, ReservationLogRepository, ReservationLogRepositoryFactory,
    SqlReservationLogRepository,
};
