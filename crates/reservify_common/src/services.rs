// --- File: crates/reservify_common/src/services.rs ---
//! Service abstractions for the collaborators of the reservation core.
//!
//! The core only talks to the event calendar, the reservation log and the
//! commit lock through these traits. Production implementations live in
//! `reservify-gcal`, `reservify-db` and `reservify-reservations::lock`; tests
//! swap in in-memory doubles.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::models::{CalendarEvent, CalendarEventResult, LogRow, ReservationRecord};

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Errors a calendar backend can report. None of them undo a reservation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalendarServiceError {
    /// No calendar configured, calendar id missing, or calendar not found.
    #[error("calendar unavailable: {0}")]
    Unavailable(String),
    #[error("invalid event times: {0}")]
    InvalidEventTimes(String),
    #[error("calendar API error: {0}")]
    Api(String),
}

/// A trait for calendar service operations.
pub trait CalendarService: Send + Sync {
    /// Create a calendar event covering `[event.start_time, event.end_time)`.
    fn create_event(
        &self,
        calendar_id: &str,
        event: CalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, CalendarServiceError>;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LogStoreError {
    #[error("log store backend error: {0}")]
    Backend(String),
}

/// Append-only store of reservation rows.
///
/// Rows are never mutated or removed; `scan_rows` yields them in insertion
/// order.
pub trait ReservationLog: Send + Sync {
    fn append_row(&self, record: ReservationRecord) -> BoxFuture<'_, (), LogStoreError>;

    /// All rows for one facility.
    fn scan_rows(&self, facility: &str) -> BoxFuture<'_, Vec<LogRow>, LogStoreError>;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LockError {
    #[error("could not acquire lock within {0:?}")]
    Timeout(Duration),
    #[error("lock backend error: {0}")]
    Backend(String),
}

/// Proof of holding the commit lock. Dropping it releases the lock.
pub struct LockGuard {
    _held: Box<dyn Send + Sync>,
}

impl LockGuard {
    /// Wraps whatever value keeps the underlying lock held.
    pub fn new<G>(held: G) -> Self
    where
        G: Send + Sync + 'static,
    {
        Self {
            _held: Box::new(held),
        }
    }
}

impl std::fmt::Debug for LockGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("LockGuard")
    }
}

/// Mutual exclusion around the count-then-append critical section.
pub trait LockProvider: Send + Sync {
    fn acquire(&self, timeout: Duration) -> BoxFuture<'_, LockGuard, LockError>;
}

/// A factory for creating service instances.
///
/// The backend builds one at startup and hands the services to the feature
/// routers.
pub trait ServiceFactory: Send + Sync {
    /// `None` when the calendar integration is disabled.
    fn calendar_service(&self) -> Option<Arc<dyn CalendarService>>;

    fn reservation_log(&self) -> Arc<dyn ReservationLog>;

    fn lock_provider(&self) -> Arc<dyn LockProvider>;
}
