// --- File: crates/services/reservify_backend/src/app_state.rs ---
use reservify_common::services::ServiceFactory;
use reservify_common::ReservifyError;
use reservify_config::AppConfig;
use reservify_reservations::ReservationState;
use std::sync::Arc;

use crate::service_factory::ReservifyServiceFactory;

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub service_factory: Arc<dyn ServiceFactory>,
    pub reservations: Arc<ReservationState>,
}

impl AppState {
    /// Builds the services from configuration and wires the reservation core.
    pub async fn new(config: Arc<AppConfig>) -> Result<Self, ReservifyError> {
        let service_factory = Arc::new(ReservifyServiceFactory::new(config.clone()).await?);
        Self::with_services(config, service_factory)
    }

    /// Same as [`AppState::new`] with externally built services.
    pub fn with_services(
        config: Arc<AppConfig>,
        service_factory: Arc<dyn ServiceFactory>,
    ) -> Result<Self, ReservifyError> {
        let reservations = Arc::new(ReservationState::from_services(
            &config,
            service_factory.as_ref(),
        )?);
        Ok(Self {
            config,
            service_factory,
            reservations,
        })
    }
}
