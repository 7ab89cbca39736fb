//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;

use hilo_catalog::DEFAULT_ENDPOINT;

/// Configuration for one client run.
#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    /// Catalog endpoint override.
    pub catalog_url: Option<String>,
    /// High score file override.
    pub store_path: Option<PathBuf>,
    /// Disable audio cues entirely.
    pub muted: bool,
}

impl AppConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HILO_CATALOG_URL` - Catalog endpoint (default: public restcountries)
    /// - `HILO_STORE_PATH` - High score file path (default: platform data dir)
    /// - `HILO_MUTED` - Disable audio cues (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.catalog_url = env::var("HILO_CATALOG_URL").ok();
        config.store_path = env::var("HILO_STORE_PATH").ok().map(PathBuf::from);

        if let Some(muted) = read_env::<bool>("HILO_MUTED") {
            config.muted = muted;
        } else if env::var("HILO_MUTED").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.muted = true;
        }

        config
    }

    /// Effective catalog endpoint.
    pub fn catalog_url(&self) -> &str {
        self.catalog_url.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
