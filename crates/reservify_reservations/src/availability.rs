// File: crates/reservify_reservations/src/availability.rs
use chrono::DateTime;
use chrono_tz::Tz;
use reservify_common::services::ReservationLog;
use std::sync::Arc;
use tracing::debug;

use crate::capacity::CapacityPolicy;
use crate::error::ReservationError;
use crate::models::CheckRequest;
use crate::slot::count_same_slot;
use crate::time::{resolve_start, TimeSettings};
use crate::validate::required;

/// How full one slot is right now.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotOccupancy {
    pub start: DateTime<Tz>,
    pub count: usize,
    pub capacity: u32,
}

impl SlotOccupancy {
    pub fn available(&self) -> bool {
        (self.count as u64) < u64::from(self.capacity)
    }
}

/// Answers "is this slot open?" without taking the commit lock. The answer
/// may be stale by the time a reservation is made.
pub struct AvailabilityChecker {
    log: Arc<dyn ReservationLog>,
    capacities: Arc<CapacityPolicy>,
    settings: TimeSettings,
}

impl AvailabilityChecker {
    pub fn new(
        log: Arc<dyn ReservationLog>,
        capacities: Arc<CapacityPolicy>,
        settings: TimeSettings,
    ) -> Self {
        Self {
            log,
            capacities,
            settings,
        }
    }

    pub async fn check(&self, request: &CheckRequest) -> Result<SlotOccupancy, ReservationError> {
        let start_time = required(request.start_time.as_deref(), "startTime")?;
        let facility = required(request.facility.as_deref(), "facility")?;

        let start = resolve_start(start_time, request.start_date.as_deref(), &self.settings)?;
        let capacity = self.capacities.capacity_of(facility)?;
        let occupancy = self.occupancy(facility, &start, capacity).await?;
        debug!(
            "check {} at {}: {}/{}",
            facility, occupancy.start, occupancy.count, occupancy.capacity
        );
        Ok(occupancy)
    }

    /// Counts the current reservations in the slot of `start`.
    pub async fn occupancy(
        &self,
        facility: &str,
        start: &DateTime<Tz>,
        capacity: u32,
    ) -> Result<SlotOccupancy, ReservationError> {
        let rows = self.log.scan_rows(facility).await?;
        let count = count_same_slot(&rows, facility, start, &self.settings);
        Ok(SlotOccupancy {
            start: *start,
            count,
            capacity,
        })
    }

    pub fn log(&self) -> &Arc<dyn ReservationLog> {
        &self.log
    }

    pub fn capacities(&self) -> &CapacityPolicy {
        &self.capacities
    }

    pub fn settings(&self) -> &TimeSettings {
        &self.settings
    }
}
