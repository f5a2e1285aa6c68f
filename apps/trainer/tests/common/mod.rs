//! Shared setup for trainer integration tests.
//!
//! `TestContext` owns a scratch vocabulary directory under the system temp
//! dir, removed again on drop.

#![allow(dead_code)]

pub mod fixtures;

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::TestBackend, Terminal};
use uuid::Uuid;

use wortschatz_trainer::config::{Config, SourceSpec};
use wortschatz_trainer::db::SqliteStore;
use wortschatz_trainer::input::InputState;
use wortschatz_trainer::state::AppState;
use wortschatz_trainer::ui;

pub struct TestContext {
    pub dir: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("wortschatz-test-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create temp vocab dir");
        Self { dir }
    }

    /// Write a vocabulary file into the scratch directory.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.join(name);
        std::fs::write(&path, content).expect("write vocab file");
        path
    }

    /// Config that scans the scratch directory with `basic.txt` as fallback.
    pub fn config(&self) -> Config {
        Config {
            vocab_dir: self.dir.clone(),
            sources: None,
            fallback: SourceSpec::File(self.dir.join("basic.txt")),
            db_path: self.dir.join("test.db"),
            theme: None,
            min_swipe_distance: 50.0,
            watch: false,
        }
    }

    /// State over an in-memory store with a seeded RNG.
    pub fn state(&self) -> AppState {
        Self::state_with(self.config(), SqliteStore::open_in_memory().expect("in-memory store"))
    }

    pub fn state_with(config: Config, store: SqliteStore) -> AppState {
        AppState::with_rng(config, store, StdRng::seed_from_u64(42))
    }
}

/// Text of the screen as the terminal would show it.
pub fn screen(state: &AppState) -> String {
    screen_with(state, &InputState::new())
}

pub fn screen_with(state: &AppState, input: &InputState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("test terminal");
    terminal
        .draw(|frame| ui::render(frame, state, input))
        .expect("draw");

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

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}
