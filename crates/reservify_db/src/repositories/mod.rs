//! Repository modules for the reservation log

pub mod reservation_log;
pub mod reservation_log_factory;
pub mod reservation_log_memory;
pub mod reservation_log_sql;

pub use reservation_log::ReservationLogRepository;
pub use reservation_log_factory::ReservationLogRepositoryFactory;
pub use reservation_log_memory::MemoryReservationLog;
pub use reservation_log_sql::SqlReservationLogRepository;
