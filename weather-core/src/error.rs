use thiserror::Error;

/// Failure of a single weather lookup.
///
/// Both variants are recoverable; the caller decides how to present them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The provider could not be reached, timed out, or answered with a non-2xx status.
    #[error("network error while contacting the weather provider: {0}")]
    Network(String),

    /// The provider answered, but the payload did not describe a usable location.
    #[error("location '{0}' not found")]
    LocationNotFound(String),
}

impl LookupError {
    pub fn is_network(&self) -> bool {
        matches!(self, LookupError::Network(_))
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Network(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("location name must not be empty")]
    Empty,
}
