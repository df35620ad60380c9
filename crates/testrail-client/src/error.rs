//! Error types for TestRail API calls

use thiserror::Error;

/// Failures surfaced by [`TestRailClient`](crate::TestRailClient)
#[derive(Error, Debug)]
pub enum ClientError {
    /// Upstream answered with a non-2xx status
    #[error("TestRail API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid JSON in response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, ClientError>;
