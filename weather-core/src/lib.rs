//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - The lookup service and its TTL cache
//! - Abstraction over weather providers, with a wttr.in implementation
//! - Shared domain models and errors
//! - Configuration handling
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod service;

pub use cache::{LookupCache, LookupResult, MemoryCache};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use error::{LookupError, QueryError};
pub use model::{WeatherQuery, WeatherRecord};
pub use provider::{WeatherProvider, provider_from_config, wttr::WttrProvider};
pub use service::WeatherLookupService;
