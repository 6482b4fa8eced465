// --- File: crates/reservify_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for application-level failures.
///
/// Domain crates keep their own error enums; this one covers startup and
/// wiring in the backend.
#[derive(Error, Debug)]
pub enum ReservifyError {
    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// Implemented by every error type that can end up in a response body, so the
/// HTTP layer never has to know the variants.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, ReservifyError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, ReservifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, ReservifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| ReservifyError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, ReservifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| ReservifyError::InternalError(format!("{}: {}", f(), error)))
    }
}

pub fn config_error<T: fmt::Display>(message: T) -> ReservifyError {
    ReservifyError::ConfigError(message.to_string())
}
