//! Card navigation, marking and the article quiz.

use super::Reply;
use crate::state::{AppState, View};
use vocab_core::{Command, Input};

/// Translate a raw input and apply it to the session.
///
/// Inputs the map rejects (short swipes, unbound keys) change nothing.
pub fn handle_input(state: &mut AppState, input: &Input) -> Reply {
    let Some(command) = state.input_map.translate(input) else {
        tracing::trace!("ignored input {:?}", input);
        return Reply::Render;
    };

    state.set_view(View::Card);
    state.clear_status();
    match &command {
        Command::Guess(choice) => match state.session.guess_article(choice) {
            Some(outcome) => {
                tracing::debug!("guess {} correct={}", choice, outcome.is_correct());
            }
            None => {
                let message = guess_rejection(state);
                state.set_status(message);
            }
        },
        other => state.session.apply(other),
    }
    Reply::Render
}

fn guess_rejection(state: &AppState) -> &'static str {
    if state.session.guess_outcome().is_some() {
        "Already answered. Move on with the right arrow."
    } else if state.session.current().is_none() {
        "No card to guess."
    } else {
        "Article guesses only apply in article mode (press a)."
    }
}
