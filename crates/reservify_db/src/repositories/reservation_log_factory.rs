//! Factory for creating reservation log repositories

use crate::repositories::reservation_log_sql::SqlReservationLogRepository;
use crate::{DbClient, RepositoryFactory};

/// Builds SQL reservation logs on top of a database client.
#[derive(Debug, Clone)]
pub struct ReservationLogRepositoryFactory;

impl ReservationLogRepositoryFactory {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReservationLogRepositoryFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryFactory<SqlReservationLogRepository, DbClient> for ReservationLogRepositoryFactory {
    fn create_repository(&self, db_client: DbClient) -> SqlReservationLogRepository {
        SqlReservationLogRepository::new(db_client)
    }
}
