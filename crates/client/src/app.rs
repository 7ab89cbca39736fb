//! Application lifecycle: loading, error/retry, and the play loop.

use anyhow::{Context, Result};
use crossterm::event::{self as term_event, Event as TermEvent, KeyEventKind};
use hilo_catalog::CatalogClient;
use hilo_core::Session;
use hilo_store::HighScoreStore;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::time::Duration;

use crate::audio::AudioCues;
use crate::config::AppConfig;
use crate::event::EventLoop;
use crate::input::{Command, InputHandler};
use crate::presentation::terminal::{self, TerminalGuard, Tui};
use crate::presentation::ui;

/// Top-level application container.
///
/// Owns the outer screen flow: the loading screen while the catalog fetch is
/// in flight, the error screen with its retry action, and handoff to the
/// event loop once a session exists. A restart stays inside the event loop;
/// only a failed fetch comes back here.
pub struct App {
    config: AppConfig,
    catalog: CatalogClient,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let catalog = CatalogClient::with_endpoint(config.catalog_url());
        Self { config, catalog }
    }

    pub async fn run(self) -> Result<()> {
        let mut terminal = terminal::init().context("failed to initialize terminal")?;
        let _guard = TerminalGuard;

        let result = self.run_screens(&mut terminal).await;

        terminal::restore()?;
        result
    }

    async fn run_screens(&self, terminal: &mut Tui) -> Result<()> {
        loop {
            ui::render_loading(terminal)?;

            let pool = match self.catalog.fetch().await {
                Ok(pool) => pool,
                Err(e) => {
                    tracing::error!("Catalog fetch failed: {e}");
                    ui::render_error(terminal, &e.to_string())?;
                    if self.wait_for_retry().await? {
                        continue;
                    }
                    return Ok(());
                }
            };

            let store = match &self.config.store_path {
                Some(path) => HighScoreStore::with_path(path.clone()),
                None => HighScoreStore::open(),
            };
            let high_score = store.load();

            let mut rng = StdRng::from_entropy();
            let session = Session::new(pool, high_score, &mut rng)
                .context("catalog cannot supply two distinct entities")?;

            let audio = AudioCues::new(self.config.muted);
            let best = EventLoop::new(session, store, audio).run(terminal).await?;
            tracing::info!("Session ended with best score {best}");
            return Ok(());
        }
    }

    /// Blocks on the error screen until the user retries or quits.
    ///
    /// Returns true to retry the fetch, false to exit.
    async fn wait_for_retry(&self) -> Result<bool> {
        let input = InputHandler;

        loop {
            tokio::time::sleep(Duration::from_millis(16)).await;

            if !term_event::poll(Duration::from_millis(0))? {
                continue;
            }

            if let TermEvent::Key(key) = term_event::read()?
                && key.kind == KeyEventKind::Press
            {
                match input.handle_key(key) {
                    Command::Restart => return Ok(true),
                    Command::Quit => return Ok(false),
                    _ => {}
                }
            }
        }
    }
}
