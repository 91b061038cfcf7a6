//! Error handling for the extraction client

use thiserror::Error;

/// Failure classes for one extraction request
///
/// The GUI collapses every variant into a single generic notification; the
/// distinction only matters for logs and tests.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Transport failure, including the 20s client timeout.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("Extraction endpoint returned HTTP {0}")]
    Status(u16),

    /// Body did not match the expected envelope shape.
    #[error("Malformed response body: {0}")]
    MalformedResponse(String),
}

impl ExtractError {
    /// True when the failure was the client-side timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ExtractError::Network(e) if e.is_timeout())
    }
}
