use crate::error::QueryError;

/// A location name as typed by the user, trimmed and known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeatherQuery {
    location_name: String,
}

impl WeatherQuery {
    /// Trim `raw` and reject it if nothing is left.
    pub fn new(raw: &str) -> Result<Self, QueryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QueryError::Empty);
        }

        Ok(Self { location_name: trimmed.to_string() })
    }

    pub fn location_name(&self) -> &str {
        &self.location_name
    }

    /// Key under which results for this query are cached. Case is preserved.
    pub fn cache_key(&self) -> &str {
        &self.location_name
    }
}

impl std::fmt::Display for WeatherQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.location_name)
    }
}

impl TryFrom<&str> for WeatherQuery {
    type Error = QueryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        WeatherQuery::new(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    /// Provider's canonical area name; may differ from the query.
    pub resolved_location_name: String,
    pub temperature_celsius: f64,
    /// Expected to be 0..=100, not enforced.
    pub humidity_percent: i32,
    pub condition_description: String,
}
