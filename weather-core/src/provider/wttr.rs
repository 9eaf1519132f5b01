use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::{
    error::LookupError,
    model::{WeatherQuery, WeatherRecord},
};

use super::WeatherProvider;

/// Client for wttr.in's JSON (`format=j1`) endpoint.
#[derive(Debug, Clone)]
pub struct WttrProvider {
    base_url: Url,
    http: Client,
}

impl WttrProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid provider URL '{base_url}'"))?;

        if base_url.cannot_be_a_base() {
            bail!("Invalid provider URL '{base_url}': expected an http(s) base URL");
        }

        if timeout.is_zero() {
            bail!("Request timeout must be greater than zero");
        }

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for wttr.in")?;

        Ok(Self { base_url, http })
    }

    /// `<base>/<location>?format=j1`, with the location percent-encoded as one path segment.
    pub fn request_url(&self, location: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(location);
        }
        url.query_pairs_mut().append_pair("format", "j1");
        url
    }
}

#[async_trait]
impl WeatherProvider for WttrProvider {
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherRecord, LookupError> {
        let url = self.request_url(query.location_name());
        debug!(%url, "requesting current conditions");

        let res = self.http.get(url).send().await.map_err(|err| {
            warn!(error = %err, query = %query, "wttr.in request failed");
            LookupError::from(err)
        })?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            warn!(%status, query = %query, "wttr.in returned an error status");
            return Err(LookupError::Network(format!(
                "wttr.in request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        parse_report(query, &body)
    }
}

/// Extract a [`WeatherRecord`] from a `format=j1` body.
///
/// Any missing list, index or field, or a body that isn't JSON at all, means
/// the provider could not resolve `query`.
pub fn parse_report(query: &WeatherQuery, body: &str) -> Result<WeatherRecord, LookupError> {
    let not_found = || LookupError::LocationNotFound(query.location_name().to_string());

    let report: Value = serde_json::from_str(body).map_err(|err| {
        debug!(error = %err, query = %query, "wttr.in body is not JSON");
        not_found()
    })?;

    // Only the first entry of each list is read; later entries may be anything.
    let current = report.pointer("/current_condition/0").ok_or_else(not_found)?;

    let temperature_celsius = current.get("temp_C").and_then(as_f64).ok_or_else(not_found)?;
    let humidity_percent = current.get("humidity").and_then(as_i32).ok_or_else(not_found)?;
    let condition_description =
        text_at(current, "/weatherDesc/0/value").ok_or_else(not_found)?;

    let resolved_location_name =
        text_at(&report, "/nearest_area/0/areaName/0/value").ok_or_else(not_found)?;

    Ok(WeatherRecord {
        resolved_location_name,
        temperature_celsius,
        humidity_percent,
        condition_description,
    })
}

fn text_at(value: &Value, pointer: &str) -> Option<String> {
    value.pointer(pointer).and_then(Value::as_str).map(str::to_string)
}

/// wttr.in sends numbers as strings ("18"); plain JSON numbers are accepted too.
fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

fn as_i32(value: &Value) -> Option<i32> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => match n.as_i64() {
            Some(i) => i32::try_from(i).ok(),
            None => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && (i32::MIN as f64..=i32::MAX as f64).contains(f))
                .map(|f| f as i32),
        },
        _ => None,
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
