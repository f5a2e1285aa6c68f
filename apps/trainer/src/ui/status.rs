//! Status line
//!
//! Shows the command prompt while one is open, otherwise the latest status
//! message or a short key hint.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Palette;
use crate::input::InputState;
use crate::state::AppState;

const KEY_HINT: &str = "space reveal  ←/→ move  k known  r review  g grammar  ? help  q quit";

/// Render the status line.
pub fn render(frame: &mut Frame, state: &AppState, input: &InputState, palette: &Palette, area: Rect) {
    let line = if let Some(buffer) = input.prompt() {
        Line::from(vec![
            Span::styled(":", Style::default().fg(palette.title).add_modifier(Modifier::BOLD)),
            Span::raw(buffer.to_string()),
            Span::styled("█", Style::default().fg(palette.muted)),
        ])
    } else if let Some(message) = state.status() {
        Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(palette.translation),
        ))
    } else {
        Line::from(Span::styled(KEY_HINT, Style::default().fg(palette.muted)))
    };

    frame.render_widget(Paragraph::new(line), area);
}
