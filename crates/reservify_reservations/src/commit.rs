// File: crates/reservify_reservations/src/commit.rs
use chrono::{DateTime, SubsecRound, Utc};
use chrono_tz::Tz;
use reservify_common::models::{CalendarEvent, CalendarEventResult, ReservationRecord};
use reservify_common::services::{CalendarService, CalendarServiceError, LockProvider};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::availability::AvailabilityChecker;
use crate::error::ReservationError;
use crate::models::ReserveRequest;
use crate::time::{end_time_for, resolve_start};
use crate::validate::{required, validate_email};

/// Result of the calendar step. A failure here never undoes the reservation.
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarOutcome {
    Created(CalendarEventResult),
    Failed(CalendarServiceError),
}

/// A reservation that made it into the log.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitOutcome {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub calendar: CalendarOutcome,
}

/// Validates, re-checks capacity under the commit lock, appends the row and
/// registers the calendar event.
pub struct ReservationCommitter {
    checker: Arc<AvailabilityChecker>,
    lock: Arc<dyn LockProvider>,
    lock_timeout: Duration,
    calendar: Option<Arc<dyn CalendarService>>,
    calendar_id: Option<String>,
}

impl ReservationCommitter {
    pub fn new(
        checker: Arc<AvailabilityChecker>,
        lock: Arc<dyn LockProvider>,
        lock_timeout: Duration,
    ) -> Self {
        Self {
            checker,
            lock,
            lock_timeout,
            calendar: None,
            calendar_id: None,
        }
    }

    pub fn with_calendar(
        mut self,
        calendar: Option<Arc<dyn CalendarService>>,
        calendar_id: Option<String>,
    ) -> Self {
        self.calendar = calendar;
        self.calendar_id = calendar_id;
        self
    }

    pub fn checker(&self) -> &Arc<AvailabilityChecker> {
        &self.checker
    }

    pub async fn reserve(&self, request: &ReserveRequest) -> Result<CommitOutcome, ReservationError> {
        let email = required(request.email.as_deref(), "email")?;
        let facility = required(request.facility.as_deref(), "facility")?;
        let name = required(request.name.as_deref(), "name")?;
        let contact = required(request.contact.as_deref(), "contact")?;
        let start_date = required(request.start_date.as_deref(), "startDate")?;
        let start_time = required(request.start_time.as_deref(), "startTime")?;
        validate_email(email)?;

        let capacity = self.checker.capacities().capacity_of(facility)?;
        let settings = self.checker.settings();
        let start = resolve_start(start_time, Some(start_date), settings)?;
        let end = end_time_for(&start);
        let note = request
            .note
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();

        {
            let _guard = self.lock.acquire(self.lock_timeout).await?;

            let occupancy = self.checker.occupancy(facility, &start, capacity).await?;
            if !occupancy.available() {
                info!(
                    "slot full for {} at {} ({}/{})",
                    facility, start, occupancy.count, capacity
                );
                return Err(ReservationError::SlotFull);
            }

            let record = ReservationRecord {
                created_at: Utc::now()
                    .with_timezone(&settings.zone)
                    .trunc_subsecs(0)
                    .fixed_offset(),
                email: email.to_string(),
                facility: facility.to_string(),
                name: name.to_string(),
                contact: contact.to_string(),
                start_time: start.fixed_offset(),
                end_time: end.fixed_offset(),
                note: note.clone(),
            };
            self.checker.log().append_row(record).await?;
            info!("reservation stored for {} at {}", facility, start);
        }

        let event = CalendarEvent {
            start_time: start.fixed_offset(),
            end_time: end.fixed_offset(),
            summary: format!("Reservation: {} - {}", name, facility),
            description: Some(note),
        };
        let calendar = match self.create_event(event).await {
            Ok(result) => CalendarOutcome::Created(result),
            Err(e) => {
                warn!("calendar event not created for {} at {}: {}", facility, start, e);
                CalendarOutcome::Failed(e)
            }
        };

        Ok(CommitOutcome {
            start,
            end,
            calendar,
        })
    }

    async fn create_event(&self, event: CalendarEvent) -> Result<CalendarEventResult, CalendarServiceError> {
        let calendar = self.calendar.as_ref().ok_or_else(|| {
            CalendarServiceError::Unavailable("calendar service not configured".to_string())
        })?;
        let calendar_id = self
            .calendar_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| {
                CalendarServiceError::Unavailable("calendar id not configured".to_string())
            })?;
        calendar.create_event(calendar_id, event).await
    }
}
