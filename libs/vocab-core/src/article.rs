//! Grammatical article handling for the article quiz.

use serde::{Deserialize, Serialize};

/// Nominative definite articles recognised at the start of a term.
pub const ARTICLES: [&str; 3] = ["der", "die", "das"];

/// Split a leading article off a term.
///
/// Returns `(article, remainder)` when the first space-delimited token is one
/// of [`ARTICLES`] (case-insensitive), otherwise `("", term)`.
pub fn split_article(term: &str) -> (&str, &str) {
    if let Some((first, rest)) = term.split_once(' ') {
        if ARTICLES.iter().any(|a| a.eq_ignore_ascii_case(first)) {
            return (first, rest);
        }
    }
    ("", term)
}

/// Whether the term carries a detachable article.
pub fn has_article(term: &str) -> bool {
    !split_article(term).0.is_empty()
}

/// Answer buttons shown in article mode, always in this order.
pub fn article_choices() -> [&'static str; 3] {
    ARTICLES
}

/// Result of guessing the article of a term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessOutcome {
    Correct,
    Incorrect { expected: String },
}

impl GuessOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Compare a guess against the term's article.
pub fn check_guess(term: &str, guess: &str) -> GuessOutcome {
    let (article, _) = split_article(term);
    if !article.is_empty() && article.eq_ignore_ascii_case(guess.trim()) {
        GuessOutcome::Correct
    } else {
        GuessOutcome::Incorrect {
            expected: article.to_lowercase(),
        }
    }
}
