//! Color palette for the TUI.

use ratatui::style::{Color, Modifier, Style};

use crate::state::Cue;

pub const SCORE: Color = Color::Yellow;
pub const BEST: Color = Color::Cyan;
pub const NAME: Color = Color::White;
pub const IMAGE_REF: Color = Color::DarkGray;
pub const METRIC: Color = Color::LightGreen;
pub const PLACEHOLDER: Color = Color::Magenta;
pub const HINT: Color = Color::DarkGray;
pub const CORRECT: Color = Color::Green;
pub const INCORRECT: Color = Color::Red;

pub fn name_style() -> Style {
    Style::default().fg(NAME).add_modifier(Modifier::BOLD)
}

pub fn metric_style() -> Style {
    Style::default().fg(METRIC)
}

pub fn placeholder_style() -> Style {
    Style::default()
        .fg(PLACEHOLDER)
        .add_modifier(Modifier::BOLD)
}

/// Border style for the next card while a cue is flashing.
pub fn cue_border(cue: Cue) -> Style {
    match cue {
        Cue::None => Style::default(),
        Cue::Correct => Style::default().fg(CORRECT).add_modifier(Modifier::BOLD),
        Cue::Incorrect => Style::default().fg(INCORRECT).add_modifier(Modifier::BOLD),
    }
}
