// --- File: crates/reservify_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod features; // Feature flag handling
pub mod logging; // Logging utilities
pub mod models; // Records shared between the log store, calendar and reservation core
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{config_error, Context, HttpStatusCode, ReservifyError};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};

// Re-export feature flag handling utilities for easier access
pub use features::is_feature_enabled;

#[cfg(feature = "gcal")]
pub use features::is_gcal_enabled;

// This crate provides the plumbing shared by every reservify crate: the error
// taxonomy, logging setup and the service seams.
