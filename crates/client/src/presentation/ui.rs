//! Play-screen layout and render entry point.
//!
//! Composes the header, the two entity cards, and the footer; the game-over
//! modal is drawn as a centered overlay on top of the frozen play area.
use anyhow::Result;
use hilo_core::Session;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;

use crate::presentation::{terminal::Tui, theme, widgets};
use crate::state::ViewState;

/// Everything one frame needs.
pub struct RenderContext<'a> {
    pub session: &'a Session,
    pub view: &'a ViewState,
}

/// Render the play screen (plus the game-over modal when the run has ended).
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(9),    // Cards
                Constraint::Length(2), // Footer
            ])
            .split(frame.area());

        widgets::header::render(frame, chunks[0], ctx.session);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        widgets::card::render(
            frame,
            cards[0],
            "Current",
            ctx.session.current(),
            true,
            Style::default(),
        );
        widgets::card::render(
            frame,
            cards[1],
            "Next",
            ctx.session.upcoming(),
            ctx.view.metric_revealed,
            theme::cue_border(ctx.view.cue),
        );

        widgets::footer::render(frame, chunks[2], ctx.session.phase());

        if let Some(summary) = &ctx.view.summary {
            let area = centered_rect(50, 50, frame.area());
            widgets::game_over::render(frame, area, summary);
        }
    })?;

    Ok(())
}

/// Render the full-screen loading state.
pub fn render_loading(terminal: &mut Tui) -> Result<()> {
    terminal.draw(widgets::status::render_loading)?;
    Ok(())
}

/// Render the full-screen error state.
pub fn render_error(terminal: &mut Tui, message: &str) -> Result<()> {
    terminal.draw(|frame| widgets::status::render_error(frame, message))?;
    Ok(())
}

/// Create a centered rectangle for modal overlays.
fn centered_rect(
    percent_x: u16,
    percent_y: u16,
    r: ratatui::layout::Rect,
) -> ratatui::layout::Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
