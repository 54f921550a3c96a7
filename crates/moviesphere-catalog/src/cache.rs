//! In-memory TTL cache for catalog responses.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// A cached response payload with its fetch time.
#[derive(Debug, Clone)]
struct CacheEntry {
    payload: serde_json::Value,
    fetched_at: Instant,
}

/// Response cache keyed by the exact resolved request URL.
///
/// The key deliberately includes the full query string, API key and all:
/// requests made with different keys never share entries, and rotating the
/// key implicitly invalidates everything cached under the old one.
///
/// Entries past their TTL are treated as absent and overwritten in place on
/// the next store; there is no background sweep.
#[derive(Debug)]
pub struct ResponseCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl ResponseCache {
    /// Create a cache whose entries live for `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Look up a live entry. Expired entries return `None`.
    pub fn get(&self, url: &str) -> Option<serde_json::Value> {
        let entries = self.entries.lock().ok()?;
        let entry = entries.get(url)?;
        if entry.fetched_at.elapsed() < self.ttl {
            Some(entry.payload.clone())
        } else {
            None
        }
    }

    /// Store a payload under the resolved URL, stamped with the current time.
    pub fn insert(&self, url: String, payload: serde_json::Value) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                url,
                CacheEntry {
                    payload,
                    fetched_at: Instant::now(),
                },
            );
        }
    }

    /// Drop every entry, live or expired.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    /// Number of stored entries, counting expired ones not yet overwritten.
    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |entries| entries.len())
    }

    /// Whether the cache holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn live_entry_is_returned() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.insert("http://x/a".to_string(), serde_json::json!({"ok": true}));

        let hit = cache.get("http://x/a").unwrap();
        assert_eq!(hit["ok"], true);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn expired_entry_is_treated_as_absent() {
        let cache = ResponseCache::new(Duration::ZERO);
        cache.insert("http://x/a".to_string(), serde_json::json!(1));

        assert!(cache.get("http://x/a").is_none());
        // Still counted until overwritten; expiry never evicts.
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn keys_differing_in_query_string_do_not_collide() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.insert("http://x/a?api_key=one".to_string(), serde_json::json!(1));
        cache.insert("http://x/a?api_key=two".to_string(), serde_json::json!(2));

        assert_eq!(cache.get("http://x/a?api_key=one").unwrap(), 1);
        assert_eq!(cache.get("http://x/a?api_key=two").unwrap(), 2);
    }

    #[test]
    fn clear_empties_the_cache() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.insert("http://x/a".to_string(), serde_json::json!(1));
        cache.clear();
        assert!(cache.is_empty());
    }
}
