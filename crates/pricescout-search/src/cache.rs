//! Process-memory cache of aggregated search results.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use pricescout_core::Offer;

#[derive(Debug, Clone)]
struct CacheEntry {
    inserted_at: Instant,
    data: Vec<Offer>,
}

/// TTL-bounded result cache keyed by normalized query.
///
/// Entries older than the TTL are reported as misses but never evicted; the
/// next successful lookup for the key overwrites them. No size bound or LRU
/// eviction; acceptable only while entries stay small and the process
/// short-lived. The interior mutex keeps concurrent handlers from racing
/// refreshes of the same key.
#[derive(Debug)]
pub struct ResultCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ResultCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached result list for `key`, or `None` when the entry is
    /// absent or older than the TTL.
    pub async fn get(&self, key: &str) -> Option<Vec<Offer>> {
        let entries = self.entries.lock().await;
        let entry = entries.get(key)?;
        if entry.inserted_at.elapsed() >= self.ttl {
            return None;
        }
        Some(entry.data.clone())
    }

    /// Stores `data` under `key` with a fresh timestamp, overwriting any
    /// previous entry.
    pub async fn set(&self, key: &str, data: Vec<Offer>) {
        let mut entries = self.entries.lock().await;
        entries.insert(
            key.to_string(),
            CacheEntry {
                inserted_at: Instant::now(),
                data,
            },
        );
    }
}

/// Cache key for a user query: trimmed and lower-cased, so `" iPhone "` and
/// `"iphone"` share an entry.
#[must_use]
pub fn cache_key(query: &str) -> String {
    query.trim().to_lowercase()
}
