//! Short-lived response cache for non-PII aggregates.
//!
//! A plain key→value map with a fixed expiry per cache instance. Expired
//! entries are treated as absent and evicted lazily on the access that
//! finds them. Entries are immutable once set and replacement is a plain
//! overwrite, so a `std::sync::RwLock` with short critical sections is all
//! the coordination needed.
//!
//! PII-bearing responses must never be cached; the read-model only routes
//! aggregate views (overview statistics, department lists) through here.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

struct Entry<V> {
    value: V,
    inserted_at: Instant,
}

/// Key→value cache with a fixed time-to-live.
pub struct TtlCache<V> {
    ttl: Duration,
    entries: RwLock<HashMap<String, Entry<V>>>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Store a value under `key`, replacing any previous entry.
    pub fn set(&self, key: &str, value: V) {
        let mut entries = self.entries.write().expect("cache lock poisoned");
        entries.insert(
            key.to_string(),
            Entry {
                value,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Fetch the value under `key`, or `None` on miss.
    ///
    /// An expired entry counts as a miss and is evicted on the way out.
    pub fn get(&self, key: &str) -> Option<V> {
        {
            let entries = self.entries.read().expect("cache lock poisoned");
            match entries.get(key) {
                Some(entry) if entry.inserted_at.elapsed() < self.ttl => {
                    return Some(entry.value.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }
        // Lazy eviction of the expired entry found above.
        let mut entries = self.entries.write().expect("cache lock poisoned");
        if let Some(entry) = entries.get(key) {
            if entry.inserted_at.elapsed() >= self.ttl {
                entries.remove(key);
            }
        }
        None
    }

    /// Drop a single key.
    pub fn invalidate(&self, key: &str) {
        let mut entries = self.entries.write().expect("cache lock poisoned");
        entries.remove(key);
    }

    /// Drop everything.
    pub fn clear(&self) {
        let mut entries = self.entries.write().expect("cache lock poisoned");
        entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.set("overview", 42u32);
        assert_eq!(cache.get("overview"), Some(42));
        assert_eq!(cache.get("departments"), None);
    }

    #[test]
    fn overwrite_replaces_the_entry() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.set("overview", 1u32);
        cache.set("overview", 2u32);
        assert_eq!(cache.get("overview"), Some(2));
    }

    #[test]
    fn expired_entries_are_absent_and_evicted() {
        let cache = TtlCache::new(Duration::from_millis(10));
        cache.set("overview", 7u32);
        std::thread::sleep(Duration::from_millis(25));
        assert_eq!(cache.get("overview"), None);
        // Eviction happened, so the map no longer holds the key.
        assert!(cache.entries.read().unwrap().is_empty());
    }

    #[test]
    fn invalidate_and_clear_drop_entries() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.set("a", 1u32);
        cache.set("b", 2u32);

        cache.invalidate("a");
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some(2));

        cache.clear();
        assert_eq!(cache.get("b"), None);
    }
}
