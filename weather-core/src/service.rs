use std::{sync::Arc, time::Duration};
use tracing::{debug, info};

use crate::{
    cache::{LookupCache, MemoryCache},
    config::Config,
    error::LookupError,
    model::{WeatherQuery, WeatherRecord},
    provider::{WeatherProvider, provider_from_config},
};

/// Looks up current weather for a location, memoising results for a fixed TTL.
///
/// Successes and [`LookupError::LocationNotFound`] are cached. Network
/// failures are not, so the next attempt after a reconnect reaches the
/// provider again.
#[derive(Debug, Clone)]
pub struct WeatherLookupService {
    provider: Arc<dyn WeatherProvider>,
    cache: Arc<dyn LookupCache>,
    ttl: Duration,
}

impl WeatherLookupService {
    pub fn new(
        provider: Arc<dyn WeatherProvider>,
        cache: Arc<dyn LookupCache>,
        ttl: Duration,
    ) -> Self {
        Self { provider, cache, ttl }
    }

    /// Service backed by the configured provider and a fresh in-memory cache.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let provider: Arc<dyn WeatherProvider> = provider_from_config(config)?.into();
        Ok(Self::new(provider, Arc::new(MemoryCache::new()), config.cache_ttl()))
    }

    pub async fn fetch_weather(&self, query: &WeatherQuery) -> Result<WeatherRecord, LookupError> {
        let key = query.cache_key();

        if let Some(cached) = self.cache.get(key) {
            debug!(query = %query, "cache hit");
            return cached;
        }

        debug!(query = %query, "cache miss");
        let result = self.provider.current_weather(query).await;

        match &result {
            Ok(record) => {
                info!(query = %query, resolved = %record.resolved_location_name, "lookup succeeded");
                self.cache.put(key, result.clone(), self.ttl);
            }
            Err(LookupError::LocationNotFound(_)) => {
                info!(query = %query, "location not found");
                self.cache.put(key, result.clone(), self.ttl);
            }
            Err(LookupError::Network(_)) => {}
        }

        result
    }
}
