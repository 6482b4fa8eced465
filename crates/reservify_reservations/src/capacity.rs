// File: crates/reservify_reservations/src/capacity.rs
use reservify_common::{config_error, ReservifyError};
use reservify_config::{FacilityConfig, ReservationsConfig};

use crate::error::ReservationError;

/// A bookable facility and its per-hour capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facility {
    pub id: String,
    pub capacity: u32,
    pub display_name: Option<String>,
}

/// Facility identifier to maximum reservations per hour slot.
///
/// Built once at startup; listing order follows the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityPolicy {
    facilities: Vec<Facility>,
}

impl CapacityPolicy {
    pub fn from_config(facilities: &[FacilityConfig]) -> Result<Self, ReservifyError> {
        let mut policy = Vec::with_capacity(facilities.len());
        for facility in facilities {
            let id = facility.id.trim();
            if id.is_empty() {
                return Err(config_error("facility with an empty id"));
            }
            if policy.iter().any(|f: &Facility| f.id == id) {
                return Err(config_error(format!("facility {} is configured twice", id)));
            }
            policy.push(Facility {
                id: id.to_string(),
                capacity: facility.capacity,
                display_name: facility.display_name.clone(),
            });
        }
        Ok(Self {
            facilities: policy,
        })
    }

    pub fn capacity_of(&self, facility: &str) -> Result<u32, ReservationError> {
        self.facilities
            .iter()
            .find(|f| f.id == facility)
            .map(|f| f.capacity)
            .ok_or_else(|| ReservationError::UnknownFacility(facility.to_string()))
    }

    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }
}

impl Default for CapacityPolicy {
    /// `open-mat` 10, `fitness` 4.
    fn default() -> Self {
        let facilities = ReservationsConfig::default()
            .facilities
            .into_iter()
            .map(|f| Facility {
                id: f.id,
                capacity: f.capacity,
                display_name: f.display_name,
            })
            .collect();
        Self { facilities }
    }
}
