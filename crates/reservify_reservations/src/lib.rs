// --- File: crates/reservify_reservations/src/lib.rs ---
//! Slot availability and reservation commit for hour-bucketed facilities.
//!
//! [`availability::AvailabilityChecker`] answers lock-free availability
//! queries; [`commit::ReservationCommitter`] re-counts under the commit lock
//! before appending to the reservation log.

pub mod availability;
pub mod capacity;
pub mod commit;
pub mod doc;
pub mod error;
pub mod handlers;
pub mod lock;
#[cfg(test)]
mod lock_test;
pub mod models;
pub mod routes;
pub mod slot;
pub mod time;
#[cfg(test)]
mod time_proptest;
#[cfg(test)]
mod time_test;
pub mod validate;

pub use availability::{AvailabilityChecker, SlotOccupancy};
pub use capacity::{CapacityPolicy, Facility};
pub use commit::{CalendarOutcome, CommitOutcome, ReservationCommitter};
pub use error::{ParseFallbackFailed, ReservationError};
pub use handlers::ReservationState;
pub use lock::LocalLockProvider;
pub use time::{HourBucket, SerialEpoch, TimeSettings};
