use crate::{
    Config, WeatherQuery, WeatherRecord, error::LookupError, provider::wttr::WttrProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod wttr;

/// Source of current conditions for a named location.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Issue exactly one request for `query`. Implementations must not retry.
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherRecord, LookupError>;
}

/// Construct the wttr.in provider described by `config`.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let provider = WttrProvider::new(&config.provider_url, config.timeout())?;
    Ok(Box::new(provider))
}
