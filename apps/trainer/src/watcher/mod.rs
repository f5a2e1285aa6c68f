//! File system watcher for vocabulary source changes.

use crate::state::AppEvent;
use notify::{
    event::{CreateKind, ModifyKind, RemoveKind},
    Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher,
};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;

/// Quiet period after the last change before a reload is requested.
const DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Error)]
pub enum WatcherError {
    #[error("watcher not started")]
    NotStarted,

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("notify error: {0}")]
    Notify(#[from] notify::Error),
}

/// Kind of change seen on a vocabulary file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Modified,
    Renamed,
    Deleted,
}

impl ChangeKind {
    /// Classify a notify event, ignoring kinds that cannot change content.
    pub fn from_event(kind: &EventKind) -> Option<Self> {
        match kind {
            EventKind::Create(CreateKind::File) => Some(Self::Created),
            EventKind::Modify(ModifyKind::Data(_)) => Some(Self::Modified),
            EventKind::Modify(ModifyKind::Name(_)) => Some(Self::Renamed),
            EventKind::Remove(RemoveKind::File) => Some(Self::Deleted),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Modified => "modified",
            Self::Renamed => "renamed",
            Self::Deleted => "deleted",
        }
    }
}

/// Whether a path looks like a vocabulary file.
pub fn is_vocab_file(path: &Path) -> bool {
    path.extension().map(|ext| ext == "txt").unwrap_or(false)
}

/// Watches vocabulary directories and requests reloads on change.
pub struct FileWatcher {
    watcher: Option<RecommendedWatcher>,
    watched_dirs: HashSet<PathBuf>,
    stop_tx: Option<Sender<()>>,
}

impl FileWatcher {
    pub fn new() -> Self {
        Self {
            watcher: None,
            watched_dirs: HashSet::new(),
            stop_tx: None,
        }
    }

    /// Check if the watcher has been started.
    pub fn is_started(&self) -> bool {
        self.watcher.is_some()
    }

    /// Start the watcher; changes are reported on `events`.
    pub fn start(&mut self, events: UnboundedSender<AppEvent>) -> Result<(), WatcherError> {
        if self.watcher.is_some() {
            return Ok(());
        }

        let (tx, rx) = channel();
        let (stop_tx, stop_rx) = channel::<()>();

        let watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                if let Ok(event) = result {
                    let _ = tx.send(event);
                }
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        self.watcher = Some(watcher);
        self.stop_tx = Some(stop_tx);

        thread::spawn(move || {
            Self::event_loop(rx, stop_rx, events);
        });

        Ok(())
    }

    /// Stop the watcher.
    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        self.watcher = None;
        self.watched_dirs.clear();
    }

    /// Watch a directory for changes. Returns whether it was newly added.
    pub fn watch(&mut self, path: PathBuf) -> Result<bool, WatcherError> {
        if !path.is_dir() {
            return Err(WatcherError::NotADirectory(path));
        }
        let watcher = self.watcher.as_mut().ok_or(WatcherError::NotStarted)?;
        if self.watched_dirs.contains(&path) {
            return Ok(false);
        }
        watcher.watch(&path, RecursiveMode::NonRecursive)?;
        self.watched_dirs.insert(path);
        Ok(true)
    }

    /// Collect vocabulary changes and forward one reload request per burst.
    fn event_loop(rx: Receiver<Event>, stop_rx: Receiver<()>, events: UnboundedSender<AppEvent>) {
        let mut pending: Vec<(PathBuf, ChangeKind)> = Vec::new();
        loop {
            if stop_rx.try_recv().is_ok() {
                break;
            }

            match rx.recv_timeout(DEBOUNCE) {
                Ok(event) => {
                    let Some(kind) = ChangeKind::from_event(&event.kind) else {
                        continue;
                    };
                    for path in event.paths.iter().filter(|p| is_vocab_file(p)) {
                        tracing::debug!("{} {}", kind.as_str(), path.display());
                        pending.push((path.clone(), kind));
                    }
                }
                Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {
                    if pending.is_empty() {
                        continue;
                    }
                    let changes = std::mem::take(&mut pending);
                    if events.send(AppEvent::SourcesChanged { changes }).is_err() {
                        break;
                    }
                }
                Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => {
                    break;
                }
            }
        }
    }
}

impl Default for FileWatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FileWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{DataChange, RenameMode};

    #[test]
    fn only_txt_files_count() {
        assert!(is_vocab_file(Path::new("vocab/egp1.txt")));
        assert!(!is_vocab_file(Path::new("vocab/notes.md")));
        assert!(!is_vocab_file(Path::new("vocab")));
    }

    #[test]
    fn classifies_content_changes() {
        assert_eq!(
            ChangeKind::from_event(&EventKind::Create(CreateKind::File)),
            Some(ChangeKind::Created)
        );
        assert_eq!(
            ChangeKind::from_event(&EventKind::Modify(ModifyKind::Data(DataChange::Content))),
            Some(ChangeKind::Modified)
        );
        assert_eq!(
            ChangeKind::from_event(&EventKind::Modify(ModifyKind::Name(RenameMode::Both))),
            Some(ChangeKind::Renamed)
        );
        assert_eq!(
            ChangeKind::from_event(&EventKind::Create(CreateKind::Folder)),
            None
        );
    }

    #[test]
    fn watch_requires_start() {
        let mut watcher = FileWatcher::new();
        let dir = std::env::temp_dir();
        assert!(matches!(watcher.watch(dir), Err(WatcherError::NotStarted)));
    }

    #[test]
    fn watch_rejects_files() {
        let mut watcher = FileWatcher::new();
        let file = std::env::temp_dir().join("not-a-dir.txt");
        assert!(matches!(
            watcher.watch(file),
            Err(WatcherError::NotADirectory(_))
        ));
    }

    #[tokio::test]
    async fn start_is_idempotent_and_stop_clears() {
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
        let mut watcher = FileWatcher::new();
        watcher.start(tx.clone()).unwrap();
        watcher.start(tx).unwrap();
        assert!(watcher.is_started());
        assert!(watcher.watch(std::env::temp_dir()).unwrap());
        assert!(!watcher.watch(std::env::temp_dir()).unwrap());
        watcher.stop();
        assert!(!watcher.is_started());
        assert!(matches!(
            watcher.watch(std::env::temp_dir()),
            Err(WatcherError::NotStarted)
        ));
    }
}
