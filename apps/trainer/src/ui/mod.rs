//! UI rendering
//!
//! Draws [`AppState`] with ratatui widgets. Nothing here mutates state or
//! touches the terminal directly, so every view can be drawn onto a test
//! backend.

mod card;
mod panels;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Color,
};
use vocab_core::Theme;

use crate::input::InputState;
use crate::state::{AppState, View};

/// Text that stands in for a missing translation.
pub const NO_TRANSLATION: &str = "[No translation]";

/// Foreground colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub title: Color,
    pub term: Color,
    pub translation: Color,
    pub muted: Color,
    pub good: Color,
    pub bad: Color,
    pub bar: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                title: Color::LightCyan,
                term: Color::White,
                translation: Color::Yellow,
                muted: Color::DarkGray,
                good: Color::LightGreen,
                bad: Color::LightRed,
                bar: Color::Cyan,
            },
            Theme::Light => Self {
                title: Color::Blue,
                term: Color::Black,
                translation: Color::Rgb(0x9a, 0x67, 0x00),
                muted: Color::Gray,
                good: Color::Green,
                bad: Color::Red,
                bar: Color::Blue,
            },
        }
    }
}

/// Render the entire UI.
pub fn render(frame: &mut Frame, state: &AppState, input: &InputState) {
    const HEADER_HEIGHT: u16 = 3;
    const MAIN_AREA_MIN_HEIGHT: u16 = 5;
    const STATUS_HEIGHT: u16 = 1;

    let palette = Palette::for_theme(state.theme);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(MAIN_AREA_MIN_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [header_area, main_area, status_area] = chunks.as_ref() else {
        return;
    };

    card::render_header(frame, state, &palette, *header_area);
    match state.view() {
        View::Card => card::render(frame, state, &palette, *main_area),
        View::ReviewList => panels::render_review_list(frame, state, &palette, *main_area),
        View::Stats => panels::render_stats(frame, state, &palette, *main_area),
        View::Grammar => panels::render_grammar(frame, state, &palette, *main_area),
        View::Help => panels::render_help(frame, state, &palette, *main_area),
    }
    status::render(frame, state, input, &palette, *status_area);
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{Terminal, backend::TestBackend};

    use super::render;
    use crate::input::InputState;
    use crate::state::AppState;

    /// Draw onto an off-screen buffer and return its text, one line per row.
    pub fn screen(state: &AppState, input: &InputState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| render(frame, state, input)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }
}
