//! Application state.

use crate::config::Config;
use crate::db::schema::KEY_VOCAB;
use crate::db::SqliteStore;
use crate::loader::LoadOutcome;
use crate::watcher::{ChangeKind, FileWatcher};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use vocab_core::{InputMap, Session, Theme, VocabList, VocabStore};

/// Messages delivered to the event loop from background work.
#[derive(Debug)]
pub enum AppEvent {
    /// A spawned load finished.
    Loaded { generation: u64, outcome: LoadOutcome },
    /// Vocabulary files changed on disk.
    SourcesChanged { changes: Vec<(PathBuf, ChangeKind)> },
}

/// What fills the main area of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Card,
    ReviewList,
    Stats,
    Grammar,
    Help,
}

/// Everything the event loop owns. Only the loop task touches it.
pub struct AppState {
    pub config: Config,
    pub session: Session<StdRng>,
    pub store: SqliteStore,
    pub theme: Theme,
    pub input_map: InputMap,
    pub watcher: FileWatcher,
    view: View,
    /// Scroll offset of the current panel, in lines.
    scroll: u16,
    /// Transient message for the status line.
    status: Option<String>,
    saved_at: Option<DateTime<Utc>>,
    loading: bool,
    generation: u64,
}

impl AppState {
    pub fn new(config: Config, store: SqliteStore) -> Self {
        Self::with_rng(config, store, StdRng::from_os_rng())
    }

    /// Build with a specific RNG (seeded in tests).
    pub fn with_rng(config: Config, store: SqliteStore, rng: StdRng) -> Self {
        let theme = config.theme.unwrap_or_else(|| match store.load_theme() {
            Ok(theme) => theme.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("ignoring stored theme: {}", e);
                Theme::default()
            }
        });
        let input_map = InputMap::new(config.min_swipe_distance);

        let mut state = Self {
            config,
            session: Session::new(VocabList::default(), rng),
            store,
            theme,
            input_map,
            watcher: FileWatcher::new(),
            view: View::Card,
            scroll: 0,
            status: None,
            saved_at: None,
            loading: false,
            generation: 0,
        };
        state.refresh_saved_at();
        state
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Switch the main area, starting the new panel at its top.
    pub fn set_view(&mut self, view: View) {
        if self.view != view {
            self.scroll = 0;
        }
        self.view = view;
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_by(&mut self, delta: i16) {
        self.scroll = self.scroll.saturating_add_signed(delta);
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// When the stored copy of the list was last written.
    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        self.saved_at
    }

    fn refresh_saved_at(&mut self) {
        self.saved_at = match self.store.updated_at(KEY_VOCAB) {
            Ok(at) => at,
            Err(e) => {
                tracing::warn!("cannot read save time: {}", e);
                None
            }
        };
    }

    /// Register a new load and return its generation.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Install a finished load. Results from superseded loads are dropped.
    ///
    /// An empty result falls back to the stored list; a non-empty one is
    /// saved. Returns whether the session was replaced.
    pub fn apply_load(&mut self, generation: u64, outcome: LoadOutcome) -> bool {
        if generation != self.generation {
            tracing::debug!(
                "dropping stale load {} (latest {})",
                generation,
                self.generation
            );
            return false;
        }
        self.loading = false;

        let list = if outcome.list.is_empty() {
            match self.store.load_vocab() {
                Ok(Some(stored)) if !stored.is_empty() => {
                    tracing::info!("sources empty, restored {} stored entries", stored.len());
                    self.set_status(format!("Sources empty, using {} saved words", stored.len()));
                    stored
                }
                Ok(_) => outcome.list,
                Err(e) => {
                    tracing::warn!("failed to read stored vocabulary: {}", e);
                    outcome.list
                }
            }
        } else {
            if let Err(e) = self.store.save_vocab(&outcome.list) {
                tracing::warn!("failed to store vocabulary: {}", e);
            }
            self.refresh_saved_at();
            outcome.list
        };

        tracing::info!(
            "loaded {} entries from {} sources{}",
            list.len(),
            outcome.sources_read,
            if outcome.used_fallback { " (fallback)" } else { "" }
        );
        self.session.replace_vocab(list);
        true
    }

    /// Change and persist the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.store.save_theme(theme) {
            tracing::warn!("failed to store theme: {}", e);
        }
    }
}
