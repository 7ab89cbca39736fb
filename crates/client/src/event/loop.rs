//! Event loop orchestrating input, the session, and the reveal sequence.
//!
//! One tokio task drives everything: a frame tick polls keyboard input, and
//! a guess suspends the loop through the three reveal sleeps before the
//! session settles. Input arriving during a reveal is never dispatched; the
//! session's lock would reject it anyway.

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use hilo_core::{Guess, Phase, Session, Settled};
use hilo_store::HighScoreStore;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::time::{self, Duration};

use crate::audio::AudioCues;
use crate::input::{Command, InputHandler};
use crate::presentation::terminal::Tui;
use crate::presentation::ui::{self, RenderContext};
use crate::reveal;
use crate::state::ViewState;

const FRAME_INTERVAL_MS: u64 = 16;

/// Event loop owning the session and all per-run presentation state.
pub struct EventLoop {
    session: Session,
    store: HighScoreStore,
    rng: StdRng,
    input: InputHandler,
    view: ViewState,
    audio: AudioCues,
}

impl EventLoop {
    pub fn new(session: Session, store: HighScoreStore, audio: AudioCues) -> Self {
        Self {
            session,
            store,
            rng: StdRng::from_entropy(),
            input: InputHandler,
            view: ViewState::new(),
            audio,
        }
    }

    /// Runs until the user quits. Returns the session's final high score.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<u32> {
        self.render(terminal)?;

        loop {
            time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)).await;

            if self.handle_input_tick(terminal).await? {
                return Ok(self.session.high_score());
            }
        }
    }

    /// Poll for keyboard input; returns true when the loop should exit.
    async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal).await
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    async fn handle_key_press(&mut self, key: KeyEvent, terminal: &mut Tui) -> Result<bool> {
        match self.input.handle_key(key) {
            Command::Quit => {
                tracing::info!(
                    "Quitting with score {} (best {})",
                    self.session.score(),
                    self.session.high_score()
                );
                Ok(true)
            }
            Command::Guess(guess) => {
                self.handle_guess(guess, terminal).await?;
                Ok(false)
            }
            Command::Restart => {
                self.handle_restart(terminal)?;
                Ok(false)
            }
            Command::None => Ok(false),
        }
    }

    /// Evaluates a guess and plays the full reveal sequence.
    async fn handle_guess(&mut self, guess: Guess, terminal: &mut Tui) -> Result<()> {
        // Outside the ready phase the guess is simply dropped (modal screens
        // have their own bindings; the lock covers the reveal window).
        let verdict = match self.session.submit_guess(guess) {
            Ok(verdict) => verdict,
            Err(e) => {
                tracing::debug!("Ignoring guess {guess}: {e}");
                return Ok(());
            }
        };

        tracing::info!(
            "Guess {guess}: {} vs hidden {} -> {}",
            self.session.current().metric,
            self.session.upcoming().metric,
            if verdict.correct { "correct" } else { "incorrect" }
        );

        // Suspense: hold the mask a beat longer.
        self.render(terminal)?;
        time::sleep(reveal::SUSPENSE).await;

        // Reveal: show the metric, flash the cue, fire the sound.
        self.view.reveal(verdict.correct);
        self.audio.play(verdict.correct);
        self.render(terminal)?;
        time::sleep(reveal::CUE_HOLD).await;

        // Settle: clear the cue and let the outcome register.
        self.view.clear_cue();
        self.render(terminal)?;
        time::sleep(reveal::SETTLE).await;

        match self.session.settle(&mut self.rng)? {
            Settled::Advanced => {
                self.view.advance();
            }
            Settled::Ended(summary) => {
                if summary.is_new_high {
                    self.store.save(summary.high_score);
                }
                self.view.end_run(summary);
            }
        }
        self.render(terminal)?;

        // Keys pressed during the reveal were never accepted; drop them
        // instead of replaying them against the new round.
        while term_event::poll(Duration::from_millis(0))? {
            let _ = term_event::read()?;
        }

        Ok(())
    }

    /// Starts a new run from the game-over screen.
    fn handle_restart(&mut self, terminal: &mut Tui) -> Result<()> {
        if self.session.phase() != Phase::GameOver {
            return Ok(());
        }

        self.session.restart(&mut self.rng)?;
        self.view.new_run();
        tracing::info!("New run started");
        self.render(terminal)?;

        Ok(())
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        ui::render(
            terminal,
            &RenderContext {
                session: &self.session,
                view: &self.view,
            },
        )
    }
}
