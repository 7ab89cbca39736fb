//! Reveal sequence timing.
//!
//! After a guess the game runs a fixed three-phase choreography, during which
//! input is not dispatched:
//!
//! 1. suspense - the hidden metric stays masked a beat longer
//! 2. reveal   - the metric appears with a correctness cue (color + sound)
//! 3. settle   - the cue clears and the outcome registers before advancing
//!
//! The event loop drives the phases sequentially with `tokio::time::sleep`;
//! the session is only settled after all three have elapsed.

use tokio::time::Duration;

/// Delay before the hidden metric becomes visible.
pub const SUSPENSE: Duration = Duration::from_millis(300);

/// How long the correctness cue is held on screen.
pub const CUE_HOLD: Duration = Duration::from_millis(400);

/// Pause after the cue clears, before advancing or ending the run.
pub const SETTLE: Duration = Duration::from_millis(500);
