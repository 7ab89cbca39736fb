//! Catalog HTTP client.

use hilo_core::Entity;

use crate::error::CatalogError;
use crate::types::{self, CatalogRecord};

/// Default catalog endpoint: restcountries, restricted to the fields the
/// game renders.
pub const DEFAULT_ENDPOINT: &str =
    "https://restcountries.com/v3.1/all?fields=name,population,flags";

/// Read-only catalog client.
///
/// One instance per process; the underlying `reqwest::Client` pools
/// connections, though the game only ever issues a single GET per fetch
/// (startup and explicit retries).
pub struct CatalogClient {
    endpoint: String,
    http_client: reqwest::Client,
}

impl CatalogClient {
    /// Create a client against the default public endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Create a client against a custom endpoint (config override, tests).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http_client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the full entity set and filter it down to playable entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the endpoint answers with a
    /// non-success status, the body does not decode, or the filtered set is
    /// empty.
    pub async fn fetch(&self) -> Result<Vec<Entity>, CatalogError> {
        tracing::debug!("Fetching catalog from {}", self.endpoint);

        let response = self.http_client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CatalogError::Status { status, body });
        }

        // Read the body as text first so decode failures can be logged with
        // the raw payload.
        let body = response.text().await?;
        let records: Vec<CatalogRecord> = serde_json::from_str(&body).inspect_err(|_| {
            tracing::warn!("Undecodable catalog payload ({} bytes)", body.len());
        })?;

        let total = records.len();
        let entities = types::playable(records);
        if entities.is_empty() {
            return Err(CatalogError::Empty);
        }

        tracing::info!(
            "Catalog loaded: {} playable entities ({} fetched)",
            entities.len(),
            total
        );

        Ok(entities)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}
