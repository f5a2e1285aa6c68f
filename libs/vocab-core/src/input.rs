//! Input channels mapped onto session commands.
//!
//! Buttons, keys and swipes all resolve to the same [`Command`] for the same
//! logical action, so the session only ever sees commands.

use crate::types::Mode;
use serde::{Deserialize, Serialize};

/// Default minimum horizontal travel for a swipe to count.
pub const DEFAULT_MIN_SWIPE_DISTANCE: f32 = 50.0;

/// A discrete user action on the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Reveal,
    Next,
    Back,
    MarkKnown,
    MarkReview,
    ToggleReview,
    SetMode(Mode),
    Guess(String),
}

/// Keyboard keys with a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    ArrowRight,
    ArrowLeft,
    Other,
}

/// On-screen controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Button {
    /// The term itself; activating it flips the card.
    Word,
    Next,
    Back,
    Known,
    Review,
    FullWord,
    ArticleOnly,
    ToggleReview,
    Article(String),
}

/// Raw input from any channel.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Key(Key),
    Button(Button),
    Swipe { start_x: f32, end_x: f32 },
}

/// Translates raw input into commands.
#[derive(Debug, Clone, Copy)]
pub struct InputMap {
    pub min_swipe_distance: f32,
}

impl Default for InputMap {
    fn default() -> Self {
        Self {
            min_swipe_distance: DEFAULT_MIN_SWIPE_DISTANCE,
        }
    }
}

impl InputMap {
    pub fn new(min_swipe_distance: f32) -> Self {
        Self { min_swipe_distance }
    }

    /// Resolve an input to a command, or `None` when it has no binding.
    pub fn translate(&self, input: &Input) -> Option<Command> {
        match input {
            Input::Key(key) => match key {
                Key::Space => Some(Command::Reveal),
                Key::ArrowRight => Some(Command::Next),
                Key::ArrowLeft => Some(Command::Back),
                Key::Other => None,
            },
            Input::Button(button) => Some(match button {
                Button::Word => Command::Reveal,
                Button::Next => Command::Next,
                Button::Back => Command::Back,
                Button::Known => Command::MarkKnown,
                Button::Review => Command::MarkReview,
                Button::FullWord => Command::SetMode(Mode::FullWord),
                Button::ArticleOnly => Command::SetMode(Mode::ArticleOnly),
                Button::ToggleReview => Command::ToggleReview,
                Button::Article(choice) => Command::Guess(choice.clone()),
            }),
            Input::Swipe { start_x, end_x } => {
                let diff = end_x - start_x;
                if diff.abs() <= self.min_swipe_distance {
                    None
                } else if diff > 0.0 {
                    Some(Command::Back)
                } else {
                    Some(Command::Next)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_agree_on_navigation() {
        let map = InputMap::default();
        let next = [
            Input::Key(Key::ArrowRight),
            Input::Button(Button::Next),
            Input::Swipe {
                start_x: 200.0,
                end_x: 100.0,
            },
        ];
        for input in &next {
            assert_eq!(map.translate(input), Some(Command::Next), "{input:?}");
        }

        let back = [
            Input::Key(Key::ArrowLeft),
            Input::Button(Button::Back),
            Input::Swipe {
                start_x: 100.0,
                end_x: 200.0,
            },
        ];
        for input in &back {
            assert_eq!(map.translate(input), Some(Command::Back), "{input:?}");
        }
    }

    #[test]
    fn reveal_from_key_and_word_click() {
        let map = InputMap::default();
        assert_eq!(map.translate(&Input::Key(Key::Space)), Some(Command::Reveal));
        assert_eq!(
            map.translate(&Input::Button(Button::Word)),
            Some(Command::Reveal)
        );
    }

    #[test]
    fn short_swipes_are_ignored() {
        let map = InputMap::default();
        let exactly_min = Input::Swipe {
            start_x: 0.0,
            end_x: 50.0,
        };
        assert_eq!(map.translate(&exactly_min), None);

        let custom = InputMap::new(10.0);
        assert_eq!(custom.translate(&exactly_min), Some(Command::Back));
    }

    #[test]
    fn unbound_keys_do_nothing() {
        assert_eq!(InputMap::default().translate(&Input::Key(Key::Other)), None);
    }
}
