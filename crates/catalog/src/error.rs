//! Catalog error taxonomy.

use crate::types::MIN_METRIC;

/// Errors from the catalog fetch.
///
/// All variants surface to the user as the full-screen error state with a
/// retry action; none are retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Transport-level failure (DNS, TLS, connection reset, ...).
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("catalog responded with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body was not the expected record sequence.
    #[error("failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Nothing survived the playability filter; treated as a fetch failure.
    #[error("catalog has no entries with metric >= {MIN_METRIC}")]
    Empty,
}
