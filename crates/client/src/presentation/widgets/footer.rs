//! Footer widget with context-sensitive key hints.

use hilo_core::Phase;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::theme;

pub fn render(frame: &mut Frame, area: Rect, phase: Phase) {
    let hints = match phase {
        Phase::Ready => "[↑/h] Higher   [↓/l] Lower   [q] Quit",
        Phase::Revealing => "Revealing...",
        Phase::GameOver => "[r] Play Again   [q] Quit",
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(theme::HINT),
    )));

    frame.render_widget(paragraph, area);
}
