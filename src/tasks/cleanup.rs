//! Expiry Sweep Task
//!
//! Background task that periodically removes expired entries from a shared
//! memory storage.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::memory::MemoryStorage;
use crate::storage::CacheCostCalculable;

/// Spawns a background task that periodically removes expired entries.
///
/// The task sleeps for `interval`, takes the write lock and calls
/// [`MemoryStorage::remove_expired`], forever. Abort it through the returned
/// handle.
///
/// # Example
/// ```ignore
/// let storage = Arc::new(RwLock::new(MemoryStorage::<Vec<u8>>::new(config.clone())));
/// let sweep = spawn_cleanup_task(storage.clone(), config.clean_interval);
/// // Later, during shutdown:
/// sweep.abort();
/// ```
pub fn spawn_cleanup_task<V>(
    storage: Arc<RwLock<MemoryStorage<V>>>,
    interval: Duration,
) -> JoinHandle<()>
where
    V: CacheCostCalculable + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(interval_ms = interval.as_millis() as u64, "starting expiry sweep task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut guard = storage.write().await;
                guard.remove_expired()
            };

            if removed > 0 {
                info!(removed, "expiry sweep removed expired entries");
            } else {
                debug!("expiry sweep found no expired entries");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryConfig;
    use crate::storage::{ManualClock, StorageBackend, StorageExpiration};
    use chrono::{TimeDelta, Utc};

    fn shared_storage(clock: Arc<ManualClock>) -> Arc<RwLock<MemoryStorage<Vec<u8>>>> {
        Arc::new(RwLock::new(MemoryStorage::with_clock(
            MemoryConfig::default(),
            clock,
        )))
    }

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let storage = shared_storage(clock.clone());

        storage
            .write()
            .await
            .store(vec![1], "expire_soon".to_string(), Some(StorageExpiration::Seconds(1)))
            .unwrap();
        clock.advance(TimeDelta::seconds(2));

        let handle = spawn_cleanup_task(storage.clone(), Duration::from_millis(20));
        tokio::time::sleep(Duration::from_millis(200)).await;

        {
            let guard = storage.read().await;
            assert!(guard.is_empty(), "expired entry should have been swept");
            assert_eq!(guard.stats().expirations, 1);
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_live_entries() {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let storage = shared_storage(clock);

        storage
            .write()
            .await
            .store(vec![1], "long_lived".to_string(), Some(StorageExpiration::Seconds(3600)))
            .unwrap();

        let handle = spawn_cleanup_task(storage.clone(), Duration::from_millis(20));
        tokio::time::sleep(Duration::from_millis(100)).await;

        {
            let mut guard = storage.write().await;
            assert_eq!(guard.value(&"long_lived".to_string()).unwrap(), Some(vec![1]));
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let handle = spawn_cleanup_task(shared_storage(clock), Duration::from_secs(1));

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "task should be finished after abort");
    }
}
