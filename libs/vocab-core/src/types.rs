//! Core types for the vocabulary trainer.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Separator used when translations are joined for display or storage.
pub const TRANSLATION_SEPARATOR: &str = "; ";

/// One German term with every distinct translation found for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub term: String,
    /// Ordered set: first-seen order, no duplicates.
    pub translations: Vec<String>,
}

impl VocabEntry {
    /// Create an entry with no translations yet.
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            translations: Vec::new(),
        }
    }

    /// Add a translation unless it is empty or already present.
    pub fn add_translation(&mut self, translation: &str) -> bool {
        if translation.is_empty() || self.translations.iter().any(|t| t == translation) {
            return false;
        }
        self.translations.push(translation.to_string());
        true
    }

    /// Whether the entry has anything to show on the back of the card.
    pub fn has_translation(&self) -> bool {
        !self.translations.is_empty()
    }

    /// Translations joined with `"; "`.
    pub fn joined_translations(&self) -> String {
        self.translations.join(TRANSLATION_SEPARATOR)
    }
}

/// Ordered, immutable vocabulary. Progress tracking stores positions in this
/// list, so entries never move once the list is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabList {
    entries: Vec<VocabEntry>,
}

impl VocabList {
    /// Build a list from `(term, translation)` pairs, merging repeated terms.
    ///
    /// Term order is the first appearance of each term. Pairs with an empty
    /// term are skipped; an empty translation keeps the term but adds nothing
    /// to its translation set.
    pub fn from_pairs<I, T, U>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
        T: AsRef<str>,
        U: AsRef<str>,
    {
        let mut entries: Vec<VocabEntry> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for (term, translation) in pairs {
            let term = term.as_ref();
            if term.is_empty() {
                continue;
            }
            let idx = match positions.get(term) {
                Some(&idx) => idx,
                None => {
                    entries.push(VocabEntry::new(term));
                    positions.insert(term.to_string(), entries.len() - 1);
                    entries.len() - 1
                }
            };
            entries[idx].add_translation(translation.as_ref());
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&VocabEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VocabEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    /// Entries with both a term and at least one translation.
    pub fn valid_count(&self) -> usize {
        self.entries.iter().filter(|e| e.has_translation()).count()
    }

    /// Convert to the persisted shape.
    pub fn to_stored(&self) -> Vec<StoredEntry> {
        self.entries.iter().map(StoredEntry::from).collect()
    }

    /// Rebuild from the persisted shape.
    pub fn from_stored(stored: &[StoredEntry]) -> Self {
        Self::from_pairs(stored.iter().flat_map(|s| {
            let term = s.term.trim();
            let pieces: Vec<&str> = s
                .translation
                .split(TRANSLATION_SEPARATOR)
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .collect();
            if pieces.is_empty() {
                vec![(term, "")]
            } else {
                pieces.into_iter().map(|p| (term, p)).collect()
            }
        }))
    }
}

/// Persisted form of an entry: translations joined by `"; "`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEntry {
    pub term: String,
    pub translation: String,
}

impl From<&VocabEntry> for StoredEntry {
    fn from(entry: &VocabEntry) -> Self {
        Self {
            term: entry.term.clone(),
            translation: entry.joined_translations(),
        }
    }
}

/// Card display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    FullWord,
    ArticleOnly,
}

impl Default for Mode {
    fn default() -> Self {
        Self::FullWord
    }
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullWord => "full",
            Self::ArticleOnly => "article",
        }
    }
}

impl FromStr for Mode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" | "full_word" | "fullword" => Ok(Self::FullWord),
            "article" | "article_only" | "articleonly" => Ok(Self::ArticleOnly),
            other => Err(ParseError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Dark,
    Light,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Dark
    }
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl FromStr for Theme {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ParseError::UnknownTheme(other.to_string())),
        }
    }
}

/// Snapshot of learner progress for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progress {
    pub seen: usize,
    pub known: usize,
    pub review: usize,
    pub valid_words: usize,
    pub seen_percent: f64,
    pub known_percent: f64,
}

impl Progress {
    pub fn new(seen: usize, known: usize, review: usize, valid_words: usize) -> Self {
        let percent = |n: usize| {
            if valid_words == 0 {
                0.0
            } else {
                n as f64 / valid_words as f64 * 100.0
            }
        };
        Self {
            seen,
            known,
            review,
            valid_words,
            seen_percent: percent(seen),
            known_percent: percent(known),
        }
    }
}
