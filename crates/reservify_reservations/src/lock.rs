// File: crates/reservify_reservations/src/lock.rs
use reservify_common::services::{BoxFuture, LockError, LockGuard, LockProvider};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::warn;

/// Process-local commit lock.
///
/// Only serializes commits inside one process; several backend instances
/// sharing a log store need a shared [`LockProvider`] instead.
#[derive(Debug, Clone, Default)]
pub struct LocalLockProvider {
    mutex: Arc<Mutex<()>>,
}

impl LocalLockProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LockProvider for LocalLockProvider {
    fn acquire(&self, timeout: Duration) -> BoxFuture<'_, LockGuard, LockError> {
        let mutex = self.mutex.clone();
        Box::pin(async move {
            match tokio::time::timeout(timeout, mutex.lock_owned()).await {
                Ok(guard) => Ok(LockGuard::new(guard)),
                Err(_) => {
                    warn!("reservation lock not acquired within {:?}", timeout);
                    Err(LockError::Timeout(timeout))
                }
            }
        })
    }
}
