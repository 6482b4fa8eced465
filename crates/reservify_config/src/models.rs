// --- File: crates/reservify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

// --- Database Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g. sqlite://data/reservations.db, via RESERVIFY_DATABASE__URL
}

// --- Google Calendar Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GcalConfig {
    pub key_path: Option<String>,    // service account json, may be "secret_from_env"
    pub calendar_id: Option<String>, // reservations still succeed without it
}

/// One bookable facility and how many reservations fit into a single hour.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FacilityConfig {
    pub id: String,
    pub capacity: u32,
    #[serde(default)]
    pub display_name: Option<String>,
}

// --- Reservation rules ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReservationsConfig {
    /// IANA zone all slots are bucketed in, e.g. "Asia/Tokyo".
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    /// Locale of the sheet the log was exported from. `en_US` shifts the serial date epoch.
    #[serde(default)]
    pub sheet_locale: Option<String>,
    #[serde(default = "default_lock_timeout_secs")]
    pub lock_timeout_secs: u64,
    #[serde(default = "default_facilities")]
    pub facilities: Vec<FacilityConfig>,
}

fn default_time_zone() -> String {
    "Asia/Tokyo".to_string()
}

fn default_lock_timeout_secs() -> u64 {
    10
}

fn default_facilities() -> Vec<FacilityConfig> {
    vec![
        FacilityConfig {
            id: "open-mat".to_string(),
            capacity: 10,
            display_name: Some("Open Mat".to_string()),
        },
        FacilityConfig {
            id: "fitness".to_string(),
            capacity: 4,
            display_name: Some("Fitness".to_string()),
        },
    ]
}

impl Default for ReservationsConfig {
    fn default() -> Self {
        Self {
            time_zone: default_time_zone(),
            sheet_locale: None,
            lock_timeout_secs: default_lock_timeout_secs(),
            facilities: default_facilities(),
        }
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_gcal: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    #[serde(default)]
    pub gcal: Option<GcalConfig>,

    #[serde(default)]
    pub reservations: ReservationsConfig,
}
