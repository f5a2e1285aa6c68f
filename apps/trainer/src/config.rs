//! Environment-driven configuration.
//!
//! Values come from the process environment, which `run` seeds from a `.env`
//! file first. Anything missing or malformed falls back to its default.

use std::path::{Path, PathBuf};
use vocab_core::input::DEFAULT_MIN_SWIPE_DISTANCE;
use vocab_core::Theme;

const APP_DIR: &str = "wortschatz";

/// Where a vocabulary source is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    File(PathBuf),
    Url(String),
}

impl SourceSpec {
    /// Parse one configured entry, resolving relative paths against `base`.
    pub fn parse(entry: &str, base: &Path) -> Self {
        let entry = entry.trim();
        if entry.starts_with("http://") || entry.starts_with("https://") {
            return Self::Url(entry.to_string());
        }
        let path = PathBuf::from(entry);
        if path.is_absolute() {
            Self::File(path)
        } else {
            Self::File(base.join(path))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Url(url) => url.clone(),
        }
    }
}

/// Trainer configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub vocab_dir: PathBuf,
    /// Explicit sources; `None` means every `.txt` file in `vocab_dir`.
    pub sources: Option<Vec<SourceSpec>>,
    pub fallback: SourceSpec,
    pub db_path: PathBuf,
    /// Overrides the stored theme preference.
    pub theme: Option<Theme>,
    pub min_swipe_distance: f32,
    pub watch: bool,
}

impl Default for Config {
    fn default() -> Self {
        let vocab_dir = PathBuf::from("vocab");
        Self {
            fallback: SourceSpec::File(vocab_dir.join("basic.txt")),
            vocab_dir,
            sources: None,
            db_path: default_db_path(),
            theme: None,
            min_swipe_distance: DEFAULT_MIN_SWIPE_DISTANCE,
            watch: true,
        }
    }
}

impl Config {
    /// Load from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let vocab_dir = lookup("VOCAB_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.vocab_dir);

        let sources = lookup("VOCAB_SOURCES")
            .filter(|v| !v.trim().is_empty())
            .map(|v| {
                v.split(',')
                    .filter(|entry| !entry.trim().is_empty())
                    .map(|entry| SourceSpec::parse(entry, &vocab_dir))
                    .collect()
            });

        let fallback = SourceSpec::parse(
            &lookup("VOCAB_FALLBACK").unwrap_or_else(|| "basic.txt".to_string()),
            &vocab_dir,
        );

        let db_path = lookup("VOCAB_DB")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);

        let theme = lookup("VOCAB_THEME").and_then(|v| match v.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::warn!("ignoring VOCAB_THEME: {}", e);
                None
            }
        });

        let min_swipe_distance = lookup("VOCAB_SWIPE_MIN")
            .and_then(|v| match v.trim().parse::<f32>() {
                Ok(d) if d.is_finite() && d >= 0.0 => Some(d),
                _ => {
                    tracing::warn!("ignoring VOCAB_SWIPE_MIN={:?}", v);
                    None
                }
            })
            .unwrap_or(defaults.min_swipe_distance);

        let watch = lookup("VOCAB_WATCH")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "0" | "false" | "no" | "off"))
            .unwrap_or(defaults.watch);

        Self {
            vocab_dir,
            sources,
            fallback,
            db_path,
            theme,
            min_swipe_distance,
            watch,
        }
    }
}

/// Log file for the interactive trainer (`VOCAB_LOG`). The terminal belongs
/// to the UI while it runs, so logs cannot go to stderr.
pub fn log_path<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    lookup("VOCAB_LOG")
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| data_dir().join("wortschatz.log"))
}

fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

fn default_db_path() -> PathBuf {
    data_dir().join("wortschatz.db")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let cfg = config(&[]);
        assert_eq!(cfg.vocab_dir, PathBuf::from("vocab"));
        assert_eq!(cfg.sources, None);
        assert_eq!(cfg.fallback, SourceSpec::File(PathBuf::from("vocab/basic.txt")));
        assert_eq!(cfg.theme, None);
        assert_eq!(cfg.min_swipe_distance, 50.0);
        assert!(cfg.watch);
    }

    #[test]
    fn log_file_sits_next_to_the_database() {
        let cfg = config(&[]);
        let log = log_path(|_| None);
        assert_eq!(log.parent(), cfg.db_path.parent());
        assert_eq!(
            log_path(|key| (key == "VOCAB_LOG").then(|| "/tmp/w.log".to_string())),
            PathBuf::from("/tmp/w.log")
        );
    }

    #[test]
    fn sources_resolve_against_vocab_dir() {
        let cfg = config(&[
            ("VOCAB_DIR", "/data/words"),
            ("VOCAB_SOURCES", "a.txt, https://example.com/b.txt,,/abs/c.txt"),
        ]);
        assert_eq!(
            cfg.sources,
            Some(vec![
                SourceSpec::File(PathBuf::from("/data/words/a.txt")),
                SourceSpec::Url("https://example.com/b.txt".to_string()),
                SourceSpec::File(PathBuf::from("/abs/c.txt")),
            ])
        );
        assert_eq!(cfg.fallback, SourceSpec::File(PathBuf::from("/data/words/basic.txt")));
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let cfg = config(&[
            ("VOCAB_THEME", "purple"),
            ("VOCAB_SWIPE_MIN", "-3"),
            ("VOCAB_WATCH", "off"),
        ]);
        assert_eq!(cfg.theme, None);
        assert_eq!(cfg.min_swipe_distance, 50.0);
        assert!(!cfg.watch);
    }

    #[test]
    fn theme_override_is_parsed() {
        assert_eq!(config(&[("VOCAB_THEME", "Light")]).theme, Some(Theme::Light));
    }
}
