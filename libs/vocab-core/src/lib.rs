//! Core vocabulary library shared by the trainer front ends.
//!
//! Provides:
//! - Line-based parser with cross-source deduplication and fallback
//! - Article splitting and the article quiz check
//! - Session state machine (full-word, article-only and review modes)
//! - Input mapping for keys, buttons and swipes
//! - Persistence port for the loaded list and theme
//! - Grammar reference tables

pub mod article;
pub mod error;
pub mod grammar;
pub mod input;
pub mod parser;
pub mod session;
pub mod store;
pub mod types;

pub use article::{article_choices, check_guess, has_article, split_article, GuessOutcome, ARTICLES};
pub use error::{ParseError, Result};
pub use input::{Button, Command, Input, InputMap, Key};
pub use parser::{parse, parse_or_fallback};
pub use session::{ArticleHistory, OrderedIndexSet, Phase, Session};
pub use store::VocabStore;
pub use types::{Mode, Progress, StoredEntry, Theme, VocabEntry, VocabList};
