#[cfg(test)]
mod tests {
    use crate::lock::LocalLockProvider;
    use reservify_common::services::{LockError, LockProvider};
    use std::time::Duration;

    #[tokio::test]
    async fn test_lock_is_reacquirable_after_drop() {
        let provider = LocalLockProvider::new();
        let guard = provider.acquire(Duration::from_millis(50)).await.unwrap();
        drop(guard);
        assert!(provider.acquire(Duration::from_millis(50)).await.is_ok());
    }

    #[tokio::test]
    async fn test_second_acquire_times_out_while_held() {
        let provider = LocalLockProvider::new();
        let _guard = provider.acquire(Duration::from_millis(50)).await.unwrap();
        let err = provider.acquire(Duration::from_millis(20)).await.unwrap_err();
        assert_eq!(err, LockError::Timeout(Duration::from_millis(20)));
    }

    #[tokio::test]
    async fn test_clones_share_the_same_lock() {
        let provider = LocalLockProvider::new();
        let other = provider.clone();
        let _guard = provider.acquire(Duration::from_millis(50)).await.unwrap();
        assert!(other.acquire(Duration::from_millis(20)).await.is_err());
    }

    #[tokio::test]
    async fn test_waiter_gets_the_lock_once_released() {
        let provider = LocalLockProvider::new();
        let guard = provider.acquire(Duration::from_millis(50)).await.unwrap();

        let waiter = {
            let provider = provider.clone();
            tokio::spawn(async move { provider.acquire(Duration::from_secs(5)).await.is_ok() })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        drop(guard);

        assert!(waiter.await.unwrap());
    }
}
