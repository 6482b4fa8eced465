// File: crates/reservify_reservations/src/error.rs
use reservify_common::services::{LockError, LogStoreError};
use reservify_common::HttpStatusCode;
use thiserror::Error;

/// Everything that can stop a check or a reservation.
#[derive(Error, Debug)]
pub enum ReservationError {
    /// A required request field is absent or blank. Holds the wire name.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid time format: {0}")]
    InvalidTimeFormat(String),
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("unknown facility: {0}")]
    UnknownFacility(String),
    #[error("slot full")]
    SlotFull,
    /// The commit lock could not be taken. Nothing was written.
    #[error("reservation lock not acquired: {0}")]
    LockTimeout(#[from] LockError),
    #[error(transparent)]
    LogStore(#[from] LogStoreError),
    #[error("malformed request: {0}")]
    MalformedRequest(String),
    #[error("unknown action: {0}")]
    UnknownAction(String),
}

impl ReservationError {
    /// Message safe to hand to the client. Server-side failures are replaced
    /// by a generic text; the details go to the log.
    pub fn client_message(&self) -> String {
        match self {
            ReservationError::LockTimeout(_) => {
                "the reservation system is busy, please try again".to_string()
            }
            ReservationError::LogStore(_) => {
                "reservations are temporarily unavailable".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl HttpStatusCode for ReservationError {
    fn status_code(&self) -> u16 {
        match self {
            ReservationError::MissingField(_)
            | ReservationError::InvalidTimeFormat(_)
            | ReservationError::InvalidEmail(_)
            | ReservationError::UnknownFacility(_)
            | ReservationError::MalformedRequest(_)
            | ReservationError::UnknownAction(_) => 400,
            ReservationError::SlotFull => 409,
            ReservationError::LockTimeout(_) => 503,
            ReservationError::LogStore(_) => 500,
        }
    }
}

/// A stored start value none of the decoders understood. The row is skipped.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("cannot decode stored start {value:?}: {reason}")]
pub struct ParseFallbackFailed {
    pub value: String,
    pub reason: &'static str,
}

impl ParseFallbackFailed {
    pub fn new(value: impl Into<String>, reason: &'static str) -> Self {
        Self {
            value: value.into(),
            reason,
        }
    }
}
