//! Bounded cache of currency lookups keyed by normalized country code.
//!
//! Entries are evicted least-recently-used once `capacity` is reached and,
//! when a TTL is configured, expire on the first read past their age.

use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use lru::LruCache;

use countries_types::{CountryCode, LocalCurrency};

/// Sizing for [`CurrencyCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    pub capacity: usize,
    pub ttl: Option<Duration>,
}

impl CacheConfig {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ttl: None,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new(256)
    }
}

struct Slot {
    currency: LocalCurrency,
    inserted_at: Instant,
}

pub struct CurrencyCache {
    entries: Mutex<LruCache<CountryCode, Slot>>,
    ttl: Option<Duration>,
}

impl CurrencyCache {
    /// Returns `None` for a zero capacity, which disables caching.
    pub fn new(config: CacheConfig) -> Option<Self> {
        let capacity = NonZeroUsize::new(config.capacity)?;
        Some(Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl: config.ttl,
        })
    }

    // Entries are plain values, so a panic mid-update cannot leave one
    // half-written; keep serving after poisoning.
    fn lock(&self) -> MutexGuard<'_, LruCache<CountryCode, Slot>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn get(&self, code: &CountryCode) -> Option<LocalCurrency> {
        let mut entries = self.lock();
        let slot = entries.get(code)?;
        if self.ttl.is_some_and(|ttl| slot.inserted_at.elapsed() >= ttl) {
            entries.pop(code);
            return None;
        }
        Some(slot.currency.clone())
    }

    pub fn insert(&self, code: &CountryCode, currency: LocalCurrency) {
        self.lock().put(
            code.clone(),
            Slot {
                currency,
                inserted_at: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}
