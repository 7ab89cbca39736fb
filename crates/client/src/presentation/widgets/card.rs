//! Entity card: name, image reference, and a visible or masked metric.

use hilo_core::Entity;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::format::format_metric;
use crate::presentation::theme;

/// Renders one entity card.
///
/// When `metric_visible` is false the value is masked with a placeholder.
/// `border` lets the caller flash the correctness cue on the next card
/// during a reveal.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    entity: &Entity,
    metric_visible: bool,
    border: Style,
) {
    let metric_line = if metric_visible {
        Line::from(Span::styled(
            format_metric(entity.metric),
            theme::metric_style(),
        ))
    } else {
        Line::from(Span::styled("???", theme::placeholder_style()))
    };

    let text = vec![
        Line::default(),
        Line::from(Span::styled(entity.name.as_str(), theme::name_style())),
        Line::from(Span::styled(
            entity.image_ref.as_str(),
            Style::default().fg(theme::IMAGE_REF),
        )),
        Line::default(),
        metric_line,
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {title} ")),
    );

    frame.render_widget(paragraph, area);
}
