//! Full-screen loading and error states.

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme;

pub fn render_loading(frame: &mut Frame) {
    let text = vec![
        Line::default(),
        Line::from("Loading catalog..."),
        Line::default(),
        Line::from(Span::styled(
            "Fetching entities from the remote catalog",
            Style::default().fg(theme::HINT),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Higher or Lower "));

    frame.render_widget(paragraph, frame.area());
}

pub fn render_error(frame: &mut Frame, message: &str) {
    let text = vec![
        Line::default(),
        Line::from(Span::styled(
            "Could not load the catalog",
            Style::default()
                .fg(theme::INCORRECT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(message.to_string()),
        Line::default(),
        Line::from(Span::styled(
            "[r] Retry   [q] Quit",
            Style::default().fg(theme::HINT),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Error "));

    frame.render_widget(paragraph, frame.area());
}
