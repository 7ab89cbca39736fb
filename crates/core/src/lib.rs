//! Pure game logic for the higher/lower guessing game.
//!
//! `hilo-core` defines the entity pool, the random round selector, and the
//! session state machine that scores guesses. It performs no I/O: the catalog
//! fetch, score persistence, and all timing live in the edge crates, which
//! drive the session through the APIs re-exported here.
pub mod entity;
pub mod selector;
pub mod session;

pub use entity::Entity;
pub use selector::{SelectError, pick_index};
pub use session::{Guess, GuessError, Phase, RunSummary, Session, SessionError, Settled, Verdict};
