//! Remote catalog access for the guessing game.
//!
//! The catalog is a read-only HTTP endpoint serving the entity data set
//! (country names, populations, and flag images in the default deployment).
//! [`CatalogClient`] performs the single fetch, decodes the response, and
//! filters out entries whose metric falls below the playability threshold.
mod client;
mod error;
mod types;

pub use client::{CatalogClient, DEFAULT_ENDPOINT};
pub use error::CatalogError;
pub use types::MIN_METRIC;
