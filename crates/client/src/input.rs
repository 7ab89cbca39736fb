//! Input processing for the terminal client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent};
use hilo_core::Guess;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Exit the application.
    Quit,
    /// Submit a higher/lower guess.
    Guess(Guess),
    /// Start a new run (game over) or retry the fetch (error screen).
    Restart,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into game commands.
pub struct InputHandler;

impl InputHandler {
    /// Converts a raw key event into a higher-level command.
    ///
    /// Whether the command applies in the current phase is the event loop's
    /// call; during a reveal nothing is dispatched at all.
    pub fn handle_key(&self, key: KeyEvent) -> Command {
        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Up => Command::Guess(Guess::Higher),
            KeyCode::Down => Command::Guess(Guess::Lower),
            KeyCode::Enter => Command::Restart,
            KeyCode::Esc => Command::Quit,
            _ => Command::None,
        }
    }

    fn handle_char(&self, raw: char) -> Command {
        let ch = raw.to_ascii_lowercase();
        match ch {
            'q' => Command::Quit,
            'h' | 'k' => Command::Guess(Guess::Higher),
            'l' | 'j' => Command::Guess(Guess::Lower),
            'r' => Command::Restart,
            _ => Command::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_map_to_guesses() {
        let input = InputHandler;
        assert_eq!(
            input.handle_key(key(KeyCode::Up)),
            Command::Guess(Guess::Higher)
        );
        assert_eq!(
            input.handle_key(key(KeyCode::Down)),
            Command::Guess(Guess::Lower)
        );
    }

    #[test]
    fn letters_map_to_guesses_case_insensitively() {
        let input = InputHandler;
        assert_eq!(
            input.handle_key(key(KeyCode::Char('H'))),
            Command::Guess(Guess::Higher)
        );
        assert_eq!(
            input.handle_key(key(KeyCode::Char('l'))),
            Command::Guess(Guess::Lower)
        );
    }

    #[test]
    fn restart_and_quit_bindings() {
        let input = InputHandler;
        assert_eq!(input.handle_key(key(KeyCode::Char('r'))), Command::Restart);
        assert_eq!(input.handle_key(key(KeyCode::Enter)), Command::Restart);
        assert_eq!(input.handle_key(key(KeyCode::Char('q'))), Command::Quit);
        assert_eq!(input.handle_key(key(KeyCode::Esc)), Command::Quit);
    }

    #[test]
    fn unbound_keys_produce_nothing() {
        let input = InputHandler;
        assert_eq!(input.handle_key(key(KeyCode::Char('x'))), Command::None);
        assert_eq!(input.handle_key(key(KeyCode::Tab)), Command::None);
    }
}
