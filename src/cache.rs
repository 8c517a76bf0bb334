//! Time-bounded memoization of the ingestion pipeline
//!
//! A `TtlCache` wraps a loader closure behind a mutex-guarded slot holding
//! the last result and its expiry instant. The expiry check, reload, and
//! return happen inside one critical section, so concurrent callers never
//! observe a refresh in progress and exactly one refresh runs per expiry
//! window. Every caller within a window shares the same `Arc` snapshot.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::presence::{load_presence, PresenceMap};
use crate::roster::load_roster;

/// Cached value plus the instant it goes stale
struct CacheEntry<T> {
    expires_at: Instant,
    value: Arc<T>,
}

/// Memoizes a loader's result for a fixed time-to-live
pub struct TtlCache<T> {
    ttl: Duration,
    loader: Box<dyn Fn() -> T + Send + Sync>,
    slot: Mutex<Option<CacheEntry<T>>>,
}

impl<T> TtlCache<T> {
    /// Wrap `loader` behind a cache with the given time-to-live
    pub fn new<F>(ttl: Duration, loader: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            ttl,
            loader: Box::new(loader),
            slot: Mutex::new(None),
        }
    }

    /// Return the cached value, reloading it first if the TTL has lapsed
    ///
    /// Holds the slot lock across the reload: callers racing an expired
    /// entry serialize here and all leave with the snapshot produced by the
    /// single winning reload.
    pub fn get(&self) -> Arc<T> {
        let mut slot = self.slot.lock().unwrap_or_else(|poisoned| {
            // A loader panic in another thread poisons the lock; the slot
            // itself is still a consistent (entry or empty) value
            poisoned.into_inner()
        });

        let now = Instant::now();
        match slot.as_ref() {
            Some(entry) if now < entry.expires_at => Arc::clone(&entry.value),
            _ => {
                let value = Arc::new((self.loader)());
                *slot = Some(CacheEntry {
                    expires_at: now + self.ttl,
                    value: Arc::clone(&value),
                });
                value
            }
        }
    }
}

/// Default presence cache time-to-live
pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

/// TTL-cached view of the full ingestion pipeline
///
/// Each refresh re-reads the roster and the presence log; between refreshes
/// every caller shares one immutable `PresenceMap` snapshot.
pub struct PresenceCache {
    inner: TtlCache<PresenceMap>,
}

impl PresenceCache {
    /// Build a cache over the given presence/roster sources
    pub fn new(presence_path: PathBuf, roster_path: PathBuf, ttl: Duration) -> Self {
        let loader = move || {
            let roster_ids: HashSet<_> = load_roster(&roster_path).into_keys().collect();
            load_presence(&presence_path, &roster_ids)
        };
        Self {
            inner: TtlCache::new(ttl, loader),
        }
    }

    /// Current presence snapshot, at most TTL seconds stale
    pub fn get(&self) -> Arc<PresenceMap> {
        self.inner.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    fn counting_cache(ttl: Duration) -> (Arc<AtomicUsize>, TtlCache<usize>) {
        let loads = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&loads);
        let cache = TtlCache::new(ttl, move || counter.fetch_add(1, Ordering::SeqCst) + 1);
        (loads, cache)
    }

    #[test]
    fn test_get_within_ttl_loads_once() {
        let (loads, cache) = counting_cache(Duration::from_secs(600));
        let first = cache.get();
        let second = cache.get();

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert_eq!(*first, *second);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_get_after_expiry_reloads_once() {
        let (loads, cache) = counting_cache(Duration::from_millis(10));
        let first = cache.get();
        thread::sleep(Duration::from_millis(20));
        let second = cache.get();
        let third = cache.get();

        assert_eq!(loads.load(Ordering::SeqCst), 2);
        assert_eq!(*first, 1);
        assert_eq!(*second, 2);
        assert!(Arc::ptr_eq(&second, &third));
    }

    #[test]
    fn test_zero_ttl_reloads_every_call() {
        let (loads, cache) = counting_cache(Duration::ZERO);
        cache.get();
        cache.get();
        cache.get();
        assert_eq!(loads.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_concurrent_callers_share_one_load() {
        let (loads, cache) = counting_cache(Duration::from_secs(600));
        let cache = Arc::new(cache);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || *cache.get())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_presence_cache_missing_sources_is_empty() {
        let cache = PresenceCache::new(
            PathBuf::from("/nonexistent/presence.csv"),
            PathBuf::from("/nonexistent/users.xml"),
            DEFAULT_TTL,
        );
        assert!(cache.get().is_empty());
    }
}
