//! Time-limited memoisation of lookup results.
//!
//! The service talks to the cache only through [`LookupCache`], so tests can
//! swap in a [`MemoryCache`] driven by a [`ManualClock`](crate::clock::ManualClock).

use parking_lot::RwLock;
use std::{
    collections::HashMap,
    fmt::Debug,
    sync::Arc,
    time::{Duration, Instant},
};

use crate::{
    clock::{Clock, SystemClock},
    error::LookupError,
    model::WeatherRecord,
};

pub type LookupResult = Result<WeatherRecord, LookupError>;

pub trait LookupCache: Send + Sync + Debug {
    /// Return the stored result for `key` if it has not expired.
    fn get(&self, key: &str) -> Option<LookupResult>;

    /// Store `result` under `key` for `ttl`, replacing any previous entry.
    fn put(&self, key: &str, result: LookupResult, ttl: Duration);
}

#[derive(Debug, Clone)]
struct CacheEntry {
    result: LookupResult,
    stored_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn is_live(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.stored_at) < self.ttl
    }
}

/// In-process cache shared by every caller of one service.
#[derive(Debug)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    clock: Arc<dyn Clock>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { entries: RwLock::new(HashMap::new()), clock }
    }

    /// Number of stored entries, including ones that expired but were not pruned yet.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupCache for MemoryCache {
    fn get(&self, key: &str) -> Option<LookupResult> {
        let now = self.clock.now();
        let entries = self.entries.read();

        entries.get(key).filter(|entry| entry.is_live(now)).map(|entry| entry.result.clone())
    }

    fn put(&self, key: &str, result: LookupResult, ttl: Duration) {
        let now = self.clock.now();
        let mut entries = self.entries.write();

        entries.retain(|_, entry| entry.is_live(now));
        entries.insert(key.to_string(), CacheEntry { result, stored_at: now, ttl });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    const TTL: Duration = Duration::from_secs(600);

    fn seoul() -> WeatherRecord {
        WeatherRecord {
            resolved_location_name: "Seoul".into(),
            temperature_celsius: 18.0,
            humidity_percent: 55,
            condition_description: "Partly cloudy".into(),
        }
    }

    fn cache_with_clock() -> (MemoryCache, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::default());
        (MemoryCache::with_clock(clock.clone()), clock)
    }

    #[test]
    fn miss_on_unknown_key() {
        let (cache, _) = cache_with_clock();
        assert!(cache.get("Seoul").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn hit_within_ttl() {
        let (cache, clock) = cache_with_clock();
        cache.put("Seoul", Ok(seoul()), TTL);

        clock.advance(Duration::from_secs(599));
        assert_eq!(cache.get("Seoul"), Some(Ok(seoul())));
    }

    #[test]
    fn entry_expires_at_ttl() {
        let (cache, clock) = cache_with_clock();
        cache.put("Seoul", Ok(seoul()), TTL);

        clock.advance(TTL);
        assert!(cache.get("Seoul").is_none());
    }

    #[test]
    fn keys_are_case_sensitive() {
        let (cache, _) = cache_with_clock();
        cache.put("Seoul", Ok(seoul()), TTL);

        assert!(cache.get("seoul").is_none());
    }

    #[test]
    fn failures_are_stored_verbatim() {
        let (cache, _) = cache_with_clock();
        let err = LookupError::LocationNotFound("Xyzzyplace123".into());
        cache.put("Xyzzyplace123", Err(err.clone()), TTL);

        assert_eq!(cache.get("Xyzzyplace123"), Some(Err(err)));
    }

    #[test]
    fn put_prunes_expired_entries() {
        let (cache, clock) = cache_with_clock();
        cache.put("Seoul", Ok(seoul()), TTL);
        clock.advance(Duration::from_secs(700));

        cache.put("London", Ok(seoul()), TTL);
        assert_eq!(cache.len(), 1);
        assert!(cache.get("London").is_some());
    }

    #[test]
    fn put_replaces_existing_entry_and_restarts_ttl() {
        let (cache, clock) = cache_with_clock();
        cache.put("Seoul", Ok(seoul()), TTL);
        clock.advance(Duration::from_secs(500));

        let mut warmer = seoul();
        warmer.temperature_celsius = 21.5;
        cache.put("Seoul", Ok(warmer.clone()), TTL);
        clock.advance(Duration::from_secs(500));

        assert_eq!(cache.get("Seoul"), Some(Ok(warmer)));
    }

    #[test]
    fn long_gap_expires_entry() {
        let (cache, clock) = cache_with_clock();
        cache.put("Seoul", Ok(seoul()), TTL);

        clock.advance(Duration::from_secs(1800));
        assert!(cache.get("Seoul").is_none());
    }

    #[test]
    fn concurrent_readers_and_writers() {
        let cache = MemoryCache::new();
        let cities = ["Seoul", "London", "Tokyo", "Paris"];

        std::thread::scope(|scope| {
            for (i, city) in cities.iter().enumerate() {
                let cache = &cache;
                scope.spawn(move || {
                    for round in 0..200 {
                        let mut record = seoul();
                        record.resolved_location_name = city.to_string();
                        record.humidity_percent = round;
                        cache.put(city, Ok(record), TTL);

                        let other = cities[(i + 1) % cities.len()];
                        if let Some(Ok(seen)) = cache.get(other) {
                            assert_eq!(seen.resolved_location_name, other);
                        }
                    }
                });
            }
        });

        assert_eq!(cache.len(), cities.len());
        for city in cities {
            let record = cache.get(city).unwrap().unwrap();
            assert_eq!(record.resolved_location_name, city);
            assert_eq!(record.humidity_percent, 199);
        }
    }
}
