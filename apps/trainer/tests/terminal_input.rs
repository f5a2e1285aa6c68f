//! Driving a loaded session with terminal key and mouse events.

mod common;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use pretty_assertions::assert_eq;
use tokio::sync::mpsc;

use common::{fixtures, screen, screen_with, TestContext};
use vocab_core::Mode;
use wortschatz_trainer::commands::{self, Reply};
use wortschatz_trainer::input::{handle_terminal_event, InputState};
use wortschatz_trainer::loader;
use wortschatz_trainer::state::{AppEvent, AppState};
use wortschatz_trainer::watcher::ChangeKind;

async fn loaded_state(ctx: &TestContext) -> AppState {
    let mut state = ctx.state();
    let generation = state.begin_load();
    let outcome = loader::load(&state.config).await;
    assert!(state.apply_load(generation, outcome));
    state
}

fn key(code: KeyCode) -> Option<std::io::Result<Event>> {
    Some(Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))))
}

fn drag(from: u16, to: u16) -> [Option<std::io::Result<Event>>; 2] {
    let at = |kind, column| {
        Some(Ok(Event::Mouse(MouseEvent {
            kind,
            column,
            row: 10,
            modifiers: KeyModifiers::NONE,
        })))
    };
    [
        at(MouseEventKind::Down(MouseButton::Left), from),
        at(MouseEventKind::Up(MouseButton::Left), to),
    ]
}

#[tokio::test]
async fn every_next_channel_moves_the_same_way() {
    let ctx = TestContext::new();
    ctx.write("egp1.txt", fixtures::EGP1);
    ctx.write("egp2.txt", fixtures::EGP2);

    let mut picks = Vec::new();
    for line in ["right", "n", "next", "swipe 200 100"] {
        let mut state = loaded_state(&ctx).await;
        commands::dispatch(&mut state, line);
        commands::dispatch(&mut state, line);
        picks.push((state.session.current(), state.session.seen().clone()));
    }
    for code in [KeyCode::Right, KeyCode::Char('n')] {
        let mut state = loaded_state(&ctx).await;
        let mut input = InputState::new();
        handle_terminal_event(&mut input, &mut state, key(code));
        handle_terminal_event(&mut input, &mut state, key(code));
        picks.push((state.session.current(), state.session.seen().clone()));
    }
    {
        let mut state = loaded_state(&ctx).await;
        let mut input = InputState::new();
        for event in drag(40, 10).into_iter().chain(drag(40, 10)) {
            handle_terminal_event(&mut input, &mut state, event);
        }
        picks.push((state.session.current(), state.session.seen().clone()));
    }
    assert!(picks.windows(2).all(|w| w[0] == w[1]), "{:?}", picks);

    // A short swipe does nothing, typed or dragged.
    let mut state = loaded_state(&ctx).await;
    let mut input = InputState::new();
    let before = state.session.current();
    commands::dispatch(&mut state, "swipe 100 60");
    for event in drag(20, 15) {
        handle_terminal_event(&mut input, &mut state, event);
    }
    assert_eq!(state.session.current(), before);
    assert_eq!(state.session.seen().len(), 1);
}

#[tokio::test]
async fn space_key_reveals_the_translation() {
    let ctx = TestContext::new();
    ctx.write("egp10.txt", fixtures::EGP10);
    let mut state = loaded_state(&ctx).await;
    let mut input = InputState::new();

    assert!(!screen(&state).contains("fast"));
    handle_terminal_event(&mut input, &mut state, key(KeyCode::Char(' ')));
    assert!(screen(&state).contains("fast"));
    handle_terminal_event(&mut input, &mut state, key(KeyCode::Char(' ')));
    assert!(screen(&state).contains("(space to reveal)"));
}

#[tokio::test]
async fn article_keys_guess_in_article_mode() {
    let ctx = TestContext::new();
    ctx.write("nouns.txt", fixtures::NOUNS);
    let mut state = loaded_state(&ctx).await;
    let mut input = InputState::new();

    handle_terminal_event(&mut input, &mut state, key(KeyCode::Char('a')));
    assert_eq!(state.session.mode(), Mode::ArticleOnly);
    handle_terminal_event(&mut input, &mut state, key(KeyCode::Char('2')));
    assert!(screen(&state).contains("Richtig!"));
}

#[tokio::test]
async fn input_errors_are_reported_and_the_session_continues() {
    let ctx = TestContext::new();
    ctx.write("egp10.txt", fixtures::EGP10);
    let mut state = loaded_state(&ctx).await;
    let mut input = InputState::new();

    let error = std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        "stream did not contain valid UTF-8",
    );
    let reply = handle_terminal_event(&mut input, &mut state, Some(Err(error)));
    assert_eq!(reply, Reply::Render);
    assert!(screen(&state).contains("Input error: stream did not contain valid UTF-8"));

    handle_terminal_event(&mut input, &mut state, key(KeyCode::Char(' ')));
    assert!(state.session.is_revealed());
    assert_eq!(handle_terminal_event(&mut input, &mut state, None), Reply::Quit);
}

#[tokio::test]
async fn prompt_is_drawn_while_typing() {
    let ctx = TestContext::new();
    let mut state = ctx.state();
    let mut input = InputState::new();

    for c in ":theme light".chars() {
        handle_terminal_event(&mut input, &mut state, key(KeyCode::Char(c)));
    }
    assert!(screen_with(&state, &input).contains(":theme light"));

    handle_terminal_event(&mut input, &mut state, key(KeyCode::Enter));
    assert_eq!(state.theme, vocab_core::Theme::Light);
}

#[tokio::test]
async fn source_changes_start_a_reload() {
    let ctx = TestContext::new();
    ctx.write("egp10.txt", fixtures::EGP10);
    let mut state = ctx.state();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let changes = vec![(ctx.dir.join("egp10.txt"), ChangeKind::Modified)];
    let reply = wortschatz_trainer::handle_app_event(
        &mut state,
        &tx,
        AppEvent::SourcesChanged { changes },
    );
    assert_eq!(reply, Reply::Render);
    assert!(state.is_loading());
    assert_eq!(state.status(), Some("Vocabulary files changed, reloading"));

    let loaded = rx.recv().await.expect("load result");
    wortschatz_trainer::handle_app_event(&mut state, &tx, loaded);
    assert!(!state.is_loading());
    assert_eq!(state.session.vocab().len(), 1);
}
