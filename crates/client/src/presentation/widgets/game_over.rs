//! Game-over modal rendered over the frozen play area.

use hilo_core::RunSummary;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::presentation::theme;

pub fn render(frame: &mut Frame, area: Rect, summary: &RunSummary) {
    let mut text = vec![
        Line::default(),
        Line::from(Span::styled(
            "Game Over",
            Style::default()
                .fg(theme::INCORRECT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::raw("Final score: "),
            Span::styled(
                summary.final_score.to_string(),
                Style::default().fg(theme::SCORE),
            ),
        ]),
        Line::from(vec![
            Span::raw("Best: "),
            Span::styled(
                summary.high_score.to_string(),
                Style::default().fg(theme::BEST),
            ),
        ]),
    ];

    if summary.is_new_high {
        text.push(Line::default());
        text.push(Line::from(Span::styled(
            "★ New best! ★",
            Style::default()
                .fg(theme::CORRECT)
                .add_modifier(Modifier::BOLD),
        )));
    }

    text.push(Line::default());
    text.push(Line::from(Span::styled(
        "[r] Play Again   [q] Quit",
        Style::default().fg(theme::HINT),
    )));

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
