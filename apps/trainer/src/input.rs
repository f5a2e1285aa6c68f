//! Keyboard and mouse handling.
//!
//! Terminal events become [`Action`]s. Card keys resolve to the same
//! [`vocab_core::Input`] values the `:` prompt produces, so a key press, a
//! typed command and a mouse drag all reach the session the same way.

use std::io;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use vocab_core::{Button, Input, Key};

use crate::commands::{self, Action, Reply};
use crate::state::{AppState, View};

/// Assumed width of one terminal cell in pixels, for swipe distances.
pub const CELL_WIDTH_PX: f32 = 8.0;

/// Lines moved per arrow press in scrollable panels.
const SCROLL_STEP: i16 = 1;

/// Prompt buffer and an in-progress mouse drag.
#[derive(Debug, Default)]
pub struct InputState {
    prompt: Option<String>,
    drag_start: Option<u16>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text typed after `:`, when the prompt is open.
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> Reply {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Reply::Quit;
        }

        if let Some(buffer) = self.prompt.as_mut() {
            match key.code {
                KeyCode::Char(c) => buffer.push(c),
                KeyCode::Backspace => {
                    if buffer.pop().is_none() {
                        self.prompt = None;
                    }
                }
                KeyCode::Enter => {
                    let line = std::mem::take(buffer);
                    self.prompt = None;
                    return commands::dispatch(state, &line);
                }
                KeyCode::Esc => self.prompt = None,
                _ => {}
            }
            return Reply::Render;
        }

        let overlay = state.view() != View::Card;
        match key.code {
            KeyCode::Char(':') => {
                self.prompt = Some(String::new());
                Reply::Render
            }
            KeyCode::Esc | KeyCode::Char('q') if overlay => {
                state.set_view(View::Card);
                Reply::Render
            }
            KeyCode::Up if overlay => {
                state.scroll_by(-SCROLL_STEP);
                Reply::Render
            }
            KeyCode::Down if overlay => {
                state.scroll_by(SCROLL_STEP);
                Reply::Render
            }
            _ => match key_action(&key) {
                Some(action) => commands::execute(state, action),
                None => commands::execute(state, Action::Session(Input::Key(Key::Other))),
            },
        }
    }

    /// Turn a left-button drag into a swipe.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, state: &mut AppState) -> Reply {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag_start = Some(mouse.column);
                Reply::Render
            }
            MouseEventKind::Up(MouseButton::Left) => match self.drag_start.take() {
                Some(start) => {
                    let swipe = Input::Swipe {
                        start_x: f32::from(start) * CELL_WIDTH_PX,
                        end_x: f32::from(mouse.column) * CELL_WIDTH_PX,
                    };
                    commands::execute(state, Action::Session(swipe))
                }
                None => Reply::Render,
            },
            _ => Reply::Render,
        }
    }
}

/// Hotkey bindings outside the prompt.
pub fn key_action(key: &KeyEvent) -> Option<Action> {
    let session = |input| Some(Action::Session(input));
    let button = |button| Some(Action::Session(Input::Button(button)));

    match key.code {
        KeyCode::Char(' ') => session(Input::Key(Key::Space)),
        KeyCode::Right => session(Input::Key(Key::ArrowRight)),
        KeyCode::Left => session(Input::Key(Key::ArrowLeft)),
        KeyCode::Enter => button(Button::Word),
        KeyCode::Char('n') => button(Button::Next),
        KeyCode::Char('b') => button(Button::Back),
        KeyCode::Char('k') => button(Button::Known),
        KeyCode::Char('r') => button(Button::Review),
        KeyCode::Char('t') => button(Button::ToggleReview),
        KeyCode::Char('f') => button(Button::FullWord),
        KeyCode::Char('a') => button(Button::ArticleOnly),
        KeyCode::Char(c @ '1'..='3') => {
            let index = c as usize - '1' as usize;
            button(Button::Article(vocab_core::ARTICLES[index].to_string()))
        }
        KeyCode::Char('l') => Some(Action::List),
        KeyCode::Char('s') => Some(Action::Stats),
        KeyCode::Char('g') => Some(Action::Grammar),
        KeyCode::Char('?' | 'h') => Some(Action::Help),
        KeyCode::Char('c') => Some(Action::Theme(None)),
        KeyCode::Char('R') => Some(Action::Reload),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Handle one item from the terminal event stream.
///
/// A read error is reported on the status line and the loop keeps going.
/// Only the end of the stream quits.
pub fn handle_terminal_event(
    input: &mut InputState,
    state: &mut AppState,
    maybe_event: Option<io::Result<Event>>,
) -> Reply {
    match maybe_event {
        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => input.handle_key(key, state),
        Some(Ok(Event::Mouse(mouse))) => input.handle_mouse(mouse, state),
        Some(Ok(_)) => Reply::Render,
        Some(Err(e)) => {
            tracing::warn!("terminal input error: {}", e);
            state.set_status(format!("Input error: {}", e));
            Reply::Render
        }
        None => Reply::Quit,
    }
}
