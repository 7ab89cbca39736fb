//! Presentation state for the play screen.
//!
//! The session (in `hilo-core`) is the source of truth for phase, scores,
//! and entities; [`ViewState`] tracks only what the reveal choreography
//! changes frame to frame: whether the upcoming metric is masked and which
//! correctness cue is showing.

use hilo_core::RunSummary;

/// Correctness cue flashed on the next card during the reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    None,
    Correct,
    Incorrect,
}

/// Mutable view state owned by the event loop.
#[derive(Clone, Debug)]
pub struct ViewState {
    /// Whether the upcoming entity's metric is visible (false = placeholder).
    pub metric_revealed: bool,
    /// Active correctness cue.
    pub cue: Cue,
    /// Set while the game-over modal is up.
    pub summary: Option<RunSummary>,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            metric_revealed: false,
            cue: Cue::None,
            summary: None,
        }
    }

    /// Reveal phase: show the metric and flash the cue.
    pub fn reveal(&mut self, correct: bool) {
        self.metric_revealed = true;
        self.cue = if correct { Cue::Correct } else { Cue::Incorrect };
    }

    /// Settle phase: the cue clears but the metric stays visible.
    pub fn clear_cue(&mut self) {
        self.cue = Cue::None;
    }

    /// New round: mask the freshly drawn upcoming metric again.
    pub fn advance(&mut self) {
        self.metric_revealed = false;
        self.cue = Cue::None;
    }

    /// Run ended: raise the game-over modal.
    pub fn end_run(&mut self, summary: RunSummary) {
        self.summary = Some(summary);
    }

    /// Restart accepted: drop the modal and mask the metric.
    pub fn new_run(&mut self) {
        self.summary = None;
        self.advance();
    }
}
