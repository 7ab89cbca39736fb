//! Terminal client entry point for the higher/lower guessing game.
mod app;
mod audio;
mod config;
mod event;
mod format;
mod input;
mod logging;
mod presentation;
mod reveal;
mod state;

use anyhow::Result;
use app::App;
use config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_env();

    // Logging goes to a file only; the TUI owns the terminal.
    logging::init()?;

    tracing::info!("Starting hilo client");
    tracing::info!("Catalog endpoint: {}", config.catalog_url());
    tracing::info!("Audio muted: {}", config.muted);

    App::new(config).run().await
}
