// --- File: crates/services/reservify_backend/src/lib.rs ---
pub mod app_state;
pub mod service_factory;
