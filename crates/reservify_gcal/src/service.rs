// --- File: crates/reservify_gcal/src/service.rs ---
//! Google Calendar implementation of the [`CalendarService`] trait.

use chrono::Utc;
use google_calendar3::api::{Event, EventDateTime};
use reservify_common::models::{CalendarEvent, CalendarEventResult};
use reservify_common::services::{BoxFuture, CalendarService, CalendarServiceError};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::auth::HubType;

/// Google Calendar service implementation.
pub struct GoogleCalendarService {
    calendar_hub: Arc<HubType>,
    time_zone: String,
}

impl GoogleCalendarService {
    /// Events are written with UTC instants and labelled with `time_zone`
    /// (an IANA name such as "Asia/Tokyo") for display.
    pub fn new(calendar_hub: Arc<HubType>, time_zone: impl Into<String>) -> Self {
        Self {
            calendar_hub,
            time_zone: time_zone.into(),
        }
    }
}

/// Builds the API event, rejecting empty or inverted ranges.
pub fn build_event(event: CalendarEvent, time_zone: &str) -> Result<Event, CalendarServiceError> {
    let start = event.start_time.with_timezone(&Utc);
    let end = event.end_time.with_timezone(&Utc);
    if end <= start {
        return Err(CalendarServiceError::InvalidEventTimes(format!(
            "end {} is not after start {}",
            event.end_time, event.start_time
        )));
    }

    Ok(Event {
        summary: Some(event.summary),
        description: event.description.filter(|d| !d.is_empty()),
        start: Some(EventDateTime {
            date_time: Some(start),
            time_zone: Some(time_zone.to_string()),
            ..Default::default()
        }),
        end: Some(EventDateTime {
            date_time: Some(end),
            time_zone: Some(time_zone.to_string()),
            ..Default::default()
        }),
        ..Default::default()
    })
}

/// Maps an API failure onto the calendar error taxonomy. The client library
/// only exposes the HTTP status through the error text.
pub fn classify_api_error(message: &str) -> CalendarServiceError {
    if message.contains("404") || message.contains("Not Found") {
        CalendarServiceError::Unavailable(format!("calendar not found: {}", message))
    } else {
        CalendarServiceError::Api(message.to_string())
    }
}

impl CalendarService for GoogleCalendarService {
    fn create_event(
        &self,
        calendar_id: &str,
        event: CalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, CalendarServiceError> {
        let calendar_id = calendar_id.to_string();
        let calendar_hub = self.calendar_hub.clone();
        let time_zone = self.time_zone.clone();

        Box::pin(async move {
            if calendar_id.trim().is_empty() {
                return Err(CalendarServiceError::Unavailable(
                    "calendar id not configured".to_string(),
                ));
            }

            let new_event = build_event(event, &time_zone)?;
            debug!("Inserting event into calendar {}", calendar_id);

            let (_response, created_event) = calendar_hub
                .events()
                .insert(new_event, &calendar_id)
                .doit()
                .await
                .map_err(|e| {
                    warn!("Google Calendar insert failed: {}", e);
                    classify_api_error(&e.to_string())
                })?;

            info!("Created calendar event {:?}", created_event.id);
            Ok(CalendarEventResult {
                event_id: created_event.id,
                status: created_event
                    .status
                    .unwrap_or_else(|| "confirmed".to_string()),
            })
        })
    }
}
