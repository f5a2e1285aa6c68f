//! Trainer commands.
//!
//! Hotkeys and lines typed at the `:` prompt both become an [`Action`].
//! Session inputs go through the same [`vocab_core::InputMap`] whichever
//! channel produced them.

pub mod deck;
pub mod settings;
pub mod study;

use crate::state::{AppState, View};
use std::str::FromStr;
use vocab_core::{Button, Input, Key, Mode, ParseError, Theme};

/// What the event loop should do after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Render,
    Reload,
    Quit,
}

/// One user action, from a hotkey or a prompt line.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Session(Input),
    List,
    Stats,
    Grammar,
    /// Switch to the given theme, or to the other one.
    Theme(Option<Theme>),
    Reload,
    Help,
    Quit,
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        // A bare Enter or a typed space both mean the space key.
        if line.trim().is_empty() {
            return Ok(Self::Session(Input::Key(Key::Space)));
        }

        let mut words = line.split_whitespace();
        let head = words.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = words.collect();

        let action = match (head.as_str(), args.as_slice()) {
            ("space", []) => Self::Session(Input::Key(Key::Space)),
            ("word", []) => Self::Session(Input::Button(Button::Word)),
            ("right", []) => Self::Session(Input::Key(Key::ArrowRight)),
            ("left", []) => Self::Session(Input::Key(Key::ArrowLeft)),
            ("next" | "n", []) => Self::Session(Input::Button(Button::Next)),
            ("back" | "b", []) => Self::Session(Input::Button(Button::Back)),
            ("known" | "k", []) => Self::Session(Input::Button(Button::Known)),
            ("review" | "r", []) => Self::Session(Input::Button(Button::Review)),
            ("toggle-review" | "t", []) => Self::Session(Input::Button(Button::ToggleReview)),
            ("mode", [mode]) => match mode.parse::<Mode>()? {
                Mode::FullWord => Self::Session(Input::Button(Button::FullWord)),
                Mode::ArticleOnly => Self::Session(Input::Button(Button::ArticleOnly)),
            },
            ("guess", [choice]) => Self::Session(Input::Button(Button::Article(choice.to_lowercase()))),
            ("der" | "die" | "das", []) => Self::Session(Input::Button(Button::Article(head.clone()))),
            ("swipe", [start, end]) => {
                let parse = |v: &str| {
                    v.parse::<f32>()
                        .ok()
                        .filter(|n| n.is_finite())
                        .ok_or_else(|| ParseError::InvalidSwipe(line.trim().to_string()))
                };
                Self::Session(Input::Swipe {
                    start_x: parse(*start)?,
                    end_x: parse(*end)?,
                })
            }
            ("swipe", _) => return Err(ParseError::InvalidSwipe(line.trim().to_string())),
            ("list", []) => Self::List,
            ("stats", []) => Self::Stats,
            ("grammar" | "g", []) => Self::Grammar,
            ("theme", []) => Self::Theme(None),
            ("theme", [theme]) => Self::Theme(Some(theme.parse()?)),
            ("reload", []) => Self::Reload,
            ("help" | "?", []) => Self::Help,
            ("quit" | "q" | "exit", []) => Self::Quit,
            _ => return Err(ParseError::UnknownCommand(line.trim().to_string())),
        };
        Ok(action)
    }
}

/// Parse and run one prompt line.
pub fn dispatch(state: &mut AppState, line: &str) -> Reply {
    match line.parse::<Action>() {
        Ok(action) => execute(state, action),
        Err(e) => {
            tracing::debug!("rejected input {:?}: {}", line, e);
            state.set_status(format!("{} (press ? for help)", e));
            Reply::Render
        }
    }
}

/// Run an action.
pub fn execute(state: &mut AppState, action: Action) -> Reply {
    match action {
        Action::Session(input) => study::handle_input(state, &input),
        Action::List => deck::review_list(state),
        Action::Stats => deck::stats(state),
        Action::Grammar => {
            state.set_view(View::Grammar);
            Reply::Render
        }
        Action::Theme(theme) => settings::theme(state, theme),
        Action::Reload => {
            state.set_status("Reloading vocabulary");
            Reply::Reload
        }
        Action::Help => {
            state.set_view(View::Help);
            Reply::Render
        }
        Action::Quit => Reply::Quit,
    }
}
