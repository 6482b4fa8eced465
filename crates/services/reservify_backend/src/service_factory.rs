// --- File: crates/services/reservify_backend/src/service_factory.rs ---
//! Service factory implementation.
//!
//! Builds the reservation log, the commit lock and, when enabled, the Google
//! Calendar service from the application configuration.
use reservify_common::services::{CalendarService, LockProvider, ReservationLog, ServiceFactory};
use reservify_common::{Context, ReservifyError};
use reservify_config::AppConfig;
use reservify_db::{
    DbClient, MemoryReservationLog, RepositoryFactory, ReservationLogRepository,
    ReservationLogRepositoryFactory,
};
use reservify_reservations::LocalLockProvider;
use std::sync::Arc;
use tracing::{info, warn};

#[cfg(feature = "gcal")]
use {
    reservify_common::is_gcal_enabled,
    reservify_gcal::{auth::create_calendar_hub, service::GoogleCalendarService},
};

pub struct ReservifyServiceFactory {
    calendar_service: Option<Arc<dyn CalendarService>>,
    reservation_log: Arc<dyn ReservationLog>,
    lock_provider: Arc<dyn LockProvider>,
}

impl ReservifyServiceFactory {
    /// Fails only when a configured database cannot be opened. A calendar that
    /// cannot be reached is logged and left out.
    pub async fn new(config: Arc<AppConfig>) -> Result<Self, ReservifyError> {
        let reservation_log = Self::reservation_log_from(&config).await?;
        let calendar_service = Self::calendar_service_from(&config).await;

        Ok(Self {
            calendar_service,
            reservation_log,
            lock_provider: Arc::new(LocalLockProvider::new()),
        })
    }

    async fn reservation_log_from(
        config: &Arc<AppConfig>,
    ) -> Result<Arc<dyn ReservationLog>, ReservifyError> {
        if config.database.is_none() {
            warn!("No database configured, reservations are kept in memory only");
            return Ok(Arc::new(MemoryReservationLog::new()));
        }

        let db_client = DbClient::new(config)
            .await
            .context("opening the reservation database")?;
        info!("Reservation log stored in {}", db_client);
        let log = ReservationLogRepositoryFactory::new().create_repository(db_client);
        log.init_schema()
            .await
            .context("creating the reservation_log table")?;
        Ok(Arc::new(log))
    }

    #[cfg(feature = "gcal")]
    async fn calendar_service_from(config: &Arc<AppConfig>) -> Option<Arc<dyn CalendarService>> {
        if !is_gcal_enabled(config) {
            info!("Google Calendar disabled; reservations will report a calendar error");
            return None;
        }
        let gcal = config.gcal.as_ref()?;
        info!("Initializing Google Calendar service...");
        match create_calendar_hub(gcal).await {
            Ok(hub) => Some(Arc::new(GoogleCalendarService::new(
                Arc::new(hub),
                config.reservations.time_zone.clone(),
            ))),
            Err(e) => {
                warn!("Google Calendar unavailable: {}", e);
                None
            }
        }
    }

    #[cfg(not(feature = "gcal"))]
    async fn calendar_service_from(_config: &Arc<AppConfig>) -> Option<Arc<dyn CalendarService>> {
        None
    }
}

impl ServiceFactory for ReservifyServiceFactory {
    fn calendar_service(&self) -> Option<Arc<dyn CalendarService>> {
        self.calendar_service.clone()
    }

    fn reservation_log(&self) -> Arc<dyn ReservationLog> {
        self.reservation_log.clone()
    }

    fn lock_provider(&self) -> Arc<dyn LockProvider> {
        self.lock_provider.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reservify_config::DatabaseConfig;

    #[tokio::test]
    async fn without_database_the_log_lives_in_memory() {
        let factory = ReservifyServiceFactory::new(Arc::new(AppConfig::default()))
            .await
            .unwrap();
        assert!(factory.calendar_service().is_none());
        assert!(factory.reservation_log().scan_rows("fitness").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn sqlite_database_gets_its_schema() {
        let config = AppConfig {
            database: Some(DatabaseConfig {
                url: "sqlite::memory:".to_string(),
            }),
            ..AppConfig::default()
        };
        let factory = ReservifyServiceFactory::new(Arc::new(config)).await.unwrap();
        assert!(factory.reservation_log().scan_rows("open-mat").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unreachable_database_is_an_error() {
        let config = AppConfig {
            database: Some(DatabaseConfig { url: String::new() }),
            ..AppConfig::default()
        };
        assert!(ReservifyServiceFactory::new(Arc::new(config)).await.is_err());
    }

    #[cfg(feature = "gcal")]
    #[tokio::test]
    async fn broken_calendar_key_is_not_fatal() {
        let config = AppConfig {
            use_gcal: true,
            gcal: Some(reservify_config::GcalConfig {
                key_path: Some("/nonexistent/service-account.json".to_string()),
                calendar_id: Some("primary".to_string()),
            }),
            ..AppConfig::default()
        };
        let factory = ReservifyServiceFactory::new(Arc::new(config)).await.unwrap();
        assert!(factory.calendar_service().is_none());
    }
}
