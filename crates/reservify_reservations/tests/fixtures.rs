//! Test fixtures for the reservation core
//!
//! In-memory doubles for the log, the calendar and the lock, plus builders
//! that wire them into a checker and a committer.
#![allow(dead_code)]

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use reservify_common::models::{CalendarEvent, CalendarEventResult, LogRow, ReservationRecord};
use reservify_common::services::{
    BoxFuture, CalendarService, CalendarServiceError, LockProvider, LogStoreError,
    ReservationLog, ServiceFactory,
};
use reservify_config::{AppConfig, GcalConfig};
use reservify_db::MemoryReservationLog;
use reservify_reservations::models::{CheckRequest, ReserveRequest};
use reservify_reservations::{
    AvailabilityChecker, CapacityPolicy, LocalLockProvider, ReservationCommitter, TimeSettings,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const CALENDAR_ID: &str = "facility@example.com";

pub fn settings() -> TimeSettings {
    TimeSettings::new(Tz::Asia__Tokyo)
}

pub fn tokyo(day: u32, hour: u32, minute: u32) -> DateTime<Tz> {
    Tz::Asia__Tokyo
        .with_ymd_and_hms(2024, 6, day, hour, minute, 0)
        .unwrap()
}

/// Record as the committer would have written it.
pub fn stored_record(facility: &str, start: DateTime<Tz>) -> ReservationRecord {
    ReservationRecord {
        created_at: tokyo(1, 0, 0).fixed_offset(),
        email: "member@example.com".to_string(),
        facility: facility.to_string(),
        name: "Member".to_string(),
        contact: "090-0000-0000".to_string(),
        start_time: start.fixed_offset(),
        end_time: (start + chrono::Duration::hours(1)).fixed_offset(),
        note: String::new(),
    }
}

pub fn check_request(facility: &str, date: &str, time: &str) -> CheckRequest {
    CheckRequest {
        start_time: Some(time.to_string()),
        facility: Some(facility.to_string()),
        start_date: Some(date.to_string()),
    }
}

pub fn reserve_request(facility: &str, date: &str, time: &str) -> ReserveRequest {
    ReserveRequest {
        email: Some("hana@example.com".to_string()),
        facility: Some(facility.to_string()),
        name: Some("Hana".to_string()),
        contact: Some("080-1234-5678".to_string()),
        start_date: Some(date.to_string()),
        start_time: Some(time.to_string()),
        note: Some("first visit".to_string()),
    }
}

/// Calendar that accepts every event and remembers it.
#[derive(Default)]
pub struct RecordingCalendar {
    events: Mutex<Vec<(String, CalendarEvent)>>,
}

impl RecordingCalendar {
    pub fn events(&self) -> Vec<(String, CalendarEvent)> {
        self.events.lock().unwrap().clone()
    }
}

impl CalendarService for RecordingCalendar {
    fn create_event(
        &self,
        calendar_id: &str,
        event: CalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, CalendarServiceError> {
        let calendar_id = calendar_id.to_string();
        Box::pin(async move {
            let mut events = self.events.lock().unwrap();
            events.push((calendar_id, event));
            Ok(CalendarEventResult {
                event_id: Some(format!("evt-{}", events.len())),
                status: "confirmed".to_string(),
            })
        })
    }
}

/// Calendar that always fails with the given error.
pub struct FailingCalendar(pub CalendarServiceError);

impl CalendarService for FailingCalendar {
    fn create_event(
        &self,
        _calendar_id: &str,
        _event: CalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, CalendarServiceError> {
        let err = self.0.clone();
        Box::pin(async move { Err(err) })
    }
}

/// Log whose backend is down.
pub struct FailingLog;

impl ReservationLog for FailingLog {
    fn append_row(&self, _record: ReservationRecord) -> BoxFuture<'_, (), LogStoreError> {
        Box::pin(async { Err(LogStoreError::Backend("disk I/O error".to_string())) })
    }

    fn scan_rows(&self, _facility: &str) -> BoxFuture<'_, Vec<LogRow>, LogStoreError> {
        Box::pin(async { Err(LogStoreError::Backend("disk I/O error".to_string())) })
    }
}

/// Everything a test needs to drive and inspect one committer.
pub struct Harness {
    pub log: Arc<MemoryReservationLog>,
    pub calendar: Arc<RecordingCalendar>,
    pub lock: LocalLockProvider,
    pub checker: Arc<AvailabilityChecker>,
    pub committer: Arc<ReservationCommitter>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_calendar_id(Some(CALENDAR_ID.to_string()))
    }

    pub fn with_calendar_id(calendar_id: Option<String>) -> Self {
        let log = Arc::new(MemoryReservationLog::new());
        let calendar = Arc::new(RecordingCalendar::default());
        let lock = LocalLockProvider::new();
        let checker = Arc::new(AvailabilityChecker::new(
            log.clone(),
            Arc::new(CapacityPolicy::default()),
            settings(),
        ));
        let committer = ReservationCommitter::new(
            checker.clone(),
            Arc::new(lock.clone()),
            Duration::from_secs(2),
        )
        .with_calendar(Some(calendar.clone()), calendar_id);

        Self {
            log,
            calendar,
            lock,
            checker,
            committer: Arc::new(committer),
        }
    }

    /// Adds `count` existing reservations for `facility` starting at `start`.
    pub async fn seed(&self, facility: &str, start: DateTime<Tz>, count: usize) {
        for _ in 0..count {
            self.log
                .append_row(stored_record(facility, start))
                .await
                .unwrap();
        }
    }

    /// True when the commit lock is free right now.
    pub async fn lock_is_free(&self) -> bool {
        self.lock.acquire(Duration::from_millis(50)).await.is_ok()
    }
}

/// Committer over an arbitrary log, without a calendar.
pub fn committer_over(log: Arc<dyn ReservationLog>, lock: LocalLockProvider) -> ReservationCommitter {
    let checker = Arc::new(AvailabilityChecker::new(
        log,
        Arc::new(CapacityPolicy::default()),
        settings(),
    ));
    ReservationCommitter::new(checker, Arc::new(lock), Duration::from_secs(2))
}

/// Services handed to `ReservationState::from_services` in router tests.
pub struct TestServices {
    pub log: Arc<MemoryReservationLog>,
    pub calendar: Option<Arc<RecordingCalendar>>,
    pub lock: LocalLockProvider,
}

impl TestServices {
    pub fn new() -> Self {
        Self {
            log: Arc::new(MemoryReservationLog::new()),
            calendar: Some(Arc::new(RecordingCalendar::default())),
            lock: LocalLockProvider::new(),
        }
    }
}

impl ServiceFactory for TestServices {
    fn calendar_service(&self) -> Option<Arc<dyn CalendarService>> {
        self.calendar
            .clone()
            .map(|c| c as Arc<dyn CalendarService>)
    }

    fn reservation_log(&self) -> Arc<dyn ReservationLog> {
        self.log.clone()
    }

    fn lock_provider(&self) -> Arc<dyn LockProvider> {
        Arc::new(self.lock.clone())
    }
}

/// Default configuration with a calendar id set.
pub fn test_config() -> AppConfig {
    AppConfig {
        use_gcal: true,
        gcal: Some(GcalConfig {
            key_path: None,
            calendar_id: Some(CALENDAR_ID.to_string()),
        }),
        ..AppConfig::default()
    }
}
