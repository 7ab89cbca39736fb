//! Widgets composing the play, loading, error, and game-over screens.
pub mod card;
pub mod footer;
pub mod game_over;
pub mod header;
pub mod status;
