use std::{fmt::Debug, future::Future, hash::Hash, time::Duration};

use moka::future::Cache;
use tracing::debug;

/// Limits applied to every cache region. The default is unbounded with no
/// expiry, so entries live until they are invalidated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CachePolicy {
    pub time_to_live: Option<Duration>,
    pub max_capacity: Option<u64>,
}

/// One cache region with single-flight population.
///
/// Concurrent misses on the same key share one computation. A failed
/// computation is not stored; every caller waiting on it receives the error
/// and the next call computes again.
#[derive(Clone)]
pub struct ResultCache<K, V> {
    region: &'static str,
    inner: Cache<K, V>,
}

impl<K, V> ResultCache<K, V>
where
    K: Hash + Eq + Debug + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    pub fn new(region: &'static str, policy: CachePolicy) -> Self {
        let mut builder = Cache::builder().name(region);
        if let Some(time_to_live) = policy.time_to_live {
            builder = builder.time_to_live(time_to_live);
        }
        if let Some(max_capacity) = policy.max_capacity {
            builder = builder.max_capacity(max_capacity);
        }

        Self {
            region,
            inner: builder.build(),
        }
    }

    pub async fn get_or_compute<F, Fut, E>(
        &self,
        key: K,
        compute: F,
    ) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
        E: Clone + Send + Sync + 'static,
    {
        let entry = self
            .inner
            .entry(key)
            .or_try_insert_with(compute())
            .await
            .map_err(|e| E::clone(&e))?;

        debug!(
            task = "cache lookup",
            region = self.region,
            key = ?entry.key(),
            hit = !entry.is_fresh(),
        );

        Ok(entry.into_value())
    }

    pub async fn invalidate(&self, key: &K) {
        debug!(task = "cache invalidate", region = self.region, ?key);
        self.inner.invalidate(key).await;
    }

    pub fn invalidate_all(&self) {
        debug!(task = "cache invalidate all", region = self.region);
        self.inner.invalidate_all();
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }
}

#[cfg(test)]
mod test {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use tokio::{sync::Barrier, time::sleep};

    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_misses_compute_once() {
        // Arrange
        let cache = ResultCache::<i64, String>::new("test", CachePolicy::default());
        let calls = Arc::new(AtomicUsize::new(0));
        let barrier = Arc::new(Barrier::new(8));

        // Act
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = cache.clone();
                let calls = calls.clone();
                let barrier = barrier.clone();
                tokio::spawn(async move {
                    barrier.wait().await;
                    cache
                        .get_or_compute(1, || async {
                            calls.fetch_add(1, Ordering::SeqCst);
                            sleep(Duration::from_millis(100)).await;
                            Ok::<_, String>("computed".to_string())
                        })
                        .await
                })
            })
            .collect();

        let mut results = vec![];
        for handle in handles {
            results.push(handle.await.unwrap());
        }

        // Assert
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(results
            .iter()
            .all(|result| result.as_deref() == Ok("computed")));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_distinct_keys_compute_independently() {
        // Arrange
        let cache = ResultCache::<i64, i64>::new("test", CachePolicy::default());
        let calls = Arc::new(AtomicUsize::new(0));

        // Act
        let handles: Vec<_> = (0..4)
            .map(|key| {
                let cache = cache.clone();
                let calls = calls.clone();
                tokio::spawn(async move {
                    cache
                        .get_or_compute(key, || async move {
                            calls.fetch_add(1, Ordering::SeqCst);
                            sleep(Duration::from_millis(20)).await;
                            Ok::<_, String>(key * 10)
                        })
                        .await
                })
            })
            .collect();

        let mut results = vec![];
        for handle in handles {
            results.push(handle.await.unwrap().unwrap());
        }

        // Assert
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        assert_eq!(results, vec![0, 10, 20, 30]);
    }

    #[tokio::test]
    async fn test_failure_is_not_cached() {
        // Arrange
        let cache = ResultCache::<&'static str, i64>::new("test", CachePolicy::default());
        let calls = AtomicUsize::new(0);

        // Act
        let failed = cache
            .get_or_compute("all", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err::<i64, _>("store down".to_string())
            })
            .await;
        let cached_after_failure = cache.contains_key(&"all");
        let recovered = cache
            .get_or_compute("all", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, String>(7)
            })
            .await;
        let hit = cache
            .get_or_compute("all", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, String>(8)
            })
            .await;

        // Assert
        assert_eq!(failed, Err("store down".to_string()));
        assert!(!cached_after_failure);
        assert_eq!(recovered, Ok(7));
        assert_eq!(hit, Ok(7));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_waiters_share_failure() {
        // Arrange
        let cache = ResultCache::<i64, i64>::new("test", CachePolicy::default());
        let calls = Arc::new(AtomicUsize::new(0));
        let barrier = Arc::new(Barrier::new(4));

        // Act
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = cache.clone();
                let calls = calls.clone();
                let barrier = barrier.clone();
                tokio::spawn(async move {
                    barrier.wait().await;
                    cache
                        .get_or_compute(1, || async {
                            calls.fetch_add(1, Ordering::SeqCst);
                            sleep(Duration::from_millis(100)).await;
                            Err::<i64, _>("boom".to_string())
                        })
                        .await
                })
            })
            .collect();

        let mut results = vec![];
        for handle in handles {
            results.push(handle.await.unwrap());
        }

        // Assert
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(results.iter().all(|r| r == &Err("boom".to_string())));
        assert!(!cache.contains_key(&1));
    }

    #[tokio::test]
    async fn test_invalidate_forces_recompute() {
        // Arrange
        let cache = ResultCache::<i64, i64>::new("test", CachePolicy::default());
        let calls = AtomicUsize::new(0);
        let compute = || async {
            Ok::<_, String>(calls.fetch_add(1, Ordering::SeqCst) as i64)
        };

        // Act
        let first = cache.get_or_compute(1, compute).await;
        cache.invalidate(&1).await;
        let second = cache.get_or_compute(1, compute).await;
        cache.invalidate_all();
        let third = cache.get_or_compute(1, compute).await;

        // Assert
        assert_eq!(first, Ok(0));
        assert_eq!(second, Ok(1));
        assert_eq!(third, Ok(2));
    }
}
