//! Event handling for the terminal client.
//!
//! This module contains the event loop that coordinates user input, the
//! session state machine, and the timed reveal choreography.

mod r#loop;

pub use r#loop::EventLoop;
