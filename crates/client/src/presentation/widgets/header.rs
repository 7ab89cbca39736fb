//! Header widget displaying the running score and session best.

use hilo_core::Session;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme;

pub fn render(frame: &mut Frame, area: Rect, session: &Session) {
    let text = vec![Line::from(vec![
        Span::raw("Score: "),
        Span::styled(
            session.score().to_string(),
            Style::default()
                .fg(theme::SCORE)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Best: "),
        Span::styled(
            session.high_score().to_string(),
            Style::default().fg(theme::BEST),
        ),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(" Higher or Lower "));

    frame.render_widget(paragraph, area);
}
