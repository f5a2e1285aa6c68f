//! Terminal vocabulary trainer.
//!
//! One task owns the [`AppState`] and handles terminal events and
//! background events in arrival order. Loading and file watching run
//! elsewhere and report back over a channel.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod input;
pub mod loader;
pub mod state;
pub mod terminal;
pub mod ui;
pub mod watcher;

use std::fs::OpenOptions;
use std::sync::Mutex;

use crossterm::event::EventStream;
use futures::StreamExt;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::commands::Reply;
use crate::config::Config;
use crate::db::SqliteStore;
use crate::input::InputState;
use crate::state::{AppEvent, AppState};
use crate::terminal::Tui;

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    if cli.count {
        init_tracing(BoxMakeWriter::new(std::io::stderr), true);
        let config = Config::from_env();
        let count = commands::deck::count_unique(&config).await;
        println!("Total unique vocabulary terms: {}", count);
        return Ok(());
    }

    // The terminal belongs to the UI, so logs go to a file.
    init_tracing(log_writer(), false);

    let config = Config::from_env();
    let store = open_store(&config)?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut state = AppState::new(config, store);

    if state.config.watch {
        start_watcher(&mut state, tx.clone());
    }

    spawn_load(&mut state, &tx);

    let mut tui = Tui::enter()?;
    let mut input = InputState::new();
    let mut events = EventStream::new();
    tui.draw(&state, &input)?;

    loop {
        let reply = tokio::select! {
            maybe_event = events.next() => {
                input::handle_terminal_event(&mut input, &mut state, maybe_event)
            }
            Some(event) = rx.recv() => handle_app_event(&mut state, &tx, event),
        };

        match reply {
            Reply::Render => {}
            Reply::Reload => spawn_load(&mut state, &tx),
            Reply::Quit => break,
        }
        tui.draw(&state, &input)?;
    }

    drop(tui);
    state.watcher.stop();
    tracing::info!("bye");
    Ok(())
}

fn init_tracing(writer: BoxMakeWriter, ansi: bool) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(ansi),
        )
        .init();
}

/// Append to the configured log file, or discard logs when it cannot be opened.
fn log_writer() -> BoxMakeWriter {
    let path = config::log_path(|key| std::env::var(key).ok());
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(e) => {
            eprintln!("cannot open log file {}: {}", path.display(), e);
            BoxMakeWriter::new(std::io::sink)
        }
    }
}

/// Open the configured store, or an in-memory one when that fails.
fn open_store(config: &Config) -> anyhow::Result<SqliteStore> {
    if let Some(parent) = config.db_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::warn!("cannot create {}: {}", parent.display(), e);
        }
    }

    match SqliteStore::open(&config.db_path) {
        Ok(store) => Ok(store),
        Err(e) => {
            tracing::warn!(
                "cannot open {}: {}, progress will not persist",
                config.db_path.display(),
                e
            );
            Ok(SqliteStore::open_in_memory()?)
        }
    }
}

fn start_watcher(state: &mut AppState, tx: UnboundedSender<AppEvent>) {
    let dir = state.config.vocab_dir.clone();
    if let Err(e) = state.watcher.start(tx) {
        tracing::warn!("file watcher unavailable: {}", e);
        return;
    }
    match state.watcher.watch(dir.clone()) {
        Ok(_) => tracing::info!("watching {}", dir.display()),
        Err(e) => tracing::warn!("not watching {}: {}", dir.display(), e),
    }
}

/// Apply a message from background work.
pub fn handle_app_event(
    state: &mut AppState,
    tx: &UnboundedSender<AppEvent>,
    event: AppEvent,
) -> Reply {
    match event {
        AppEvent::Loaded { generation, outcome } => {
            state.apply_load(generation, outcome);
        }
        AppEvent::SourcesChanged { changes } => {
            for (path, kind) in &changes {
                tracing::info!("{} {}", kind.as_str(), path.display());
            }
            state.set_status("Vocabulary files changed, reloading");
            spawn_load(state, tx);
        }
    }
    Reply::Render
}

/// Start a background load. Its result arrives as [`AppEvent::Loaded`].
pub fn spawn_load(state: &mut AppState, tx: &UnboundedSender<AppEvent>) {
    let generation = state.begin_load();
    let config = state.config.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = loader::load(&config).await;
        // The loop may have exited; nothing to do then.
        let _ = tx.send(AppEvent::Loaded { generation, outcome });
    });
}
