//! Study session state machine.
//!
//! A [`Session`] owns the loaded [`VocabList`] and every piece of navigation
//! and progress state. All transitions are synchronous and driven by
//! [`Command`]s; random draws go through the injected RNG.

use crate::article::{check_guess, has_article, GuessOutcome};
use crate::input::Command;
use crate::types::{Mode, Progress, VocabEntry, VocabList};
use rand::Rng;
use std::collections::HashSet;

/// Set of list positions that remembers insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedIndexSet {
    order: Vec<usize>,
    members: HashSet<usize>,
}

impl OrderedIndexSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an index. Returns false if it was already present.
    pub fn insert(&mut self, index: usize) -> bool {
        if !self.members.insert(index) {
            return false;
        }
        self.order.push(index);
        true
    }

    pub fn contains(&self, index: usize) -> bool {
        self.members.contains(&index)
    }

    /// Insertion position of an index.
    pub fn position(&self, index: usize) -> Option<usize> {
        if !self.contains(index) {
            return None;
        }
        self.order.iter().position(|&i| i == index)
    }

    /// Index inserted at the given position.
    pub fn get(&self, position: usize) -> Option<usize> {
        self.order.get(position).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }
}

/// Linear back/forward history used in article mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleHistory {
    entries: Vec<usize>,
    cursor: usize,
}

impl ArticleHistory {
    /// Start over with a single entry.
    pub fn reset(&mut self, start: usize) {
        self.entries.clear();
        self.entries.push(start);
        self.cursor = 0;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    pub fn entries(&self) -> &[usize] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<usize> {
        self.entries.get(self.cursor).copied()
    }

    /// Step forward through recorded entries; `None` at the end.
    pub fn forward(&mut self) -> Option<usize> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.current()
    }

    /// Step back; `None` at the start.
    pub fn back(&mut self) -> Option<usize> {
        if self.cursor == 0 || self.entries.is_empty() {
            return None;
        }
        self.cursor -= 1;
        self.current()
    }

    /// Append an entry and move the cursor onto it.
    pub fn push(&mut self, index: usize) {
        self.entries.push(index);
        self.cursor = self.entries.len() - 1;
    }
}

/// Coarse session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing loaded.
    Idle,
    Browsing(Mode),
    /// Full-word mode drawing only from the review set.
    Reviewing,
}

/// Uniform draw from a pool of indices.
fn pick<R: Rng>(rng: &mut R, pool: &[usize]) -> Option<usize> {
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.random_range(0..pool.len())])
}

/// One learner's session over a loaded vocabulary.
#[derive(Debug)]
pub struct Session<R> {
    vocab: VocabList,
    article_pool: Vec<usize>,
    rng: R,
    current: Option<usize>,
    mode: Mode,
    seen: OrderedIndexSet,
    known: OrderedIndexSet,
    review: OrderedIndexSet,
    review_active: bool,
    revealed: bool,
    guess: Option<String>,
    history: ArticleHistory,
}

impl<R: Rng> Session<R> {
    /// Start a session in full-word mode.
    pub fn new(vocab: VocabList, rng: R) -> Self {
        let mut session = Self {
            vocab: VocabList::default(),
            article_pool: Vec::new(),
            rng,
            current: None,
            mode: Mode::FullWord,
            seen: OrderedIndexSet::new(),
            known: OrderedIndexSet::new(),
            review: OrderedIndexSet::new(),
            review_active: false,
            revealed: false,
            guess: None,
            history: ArticleHistory::default(),
        };
        session.replace_vocab(vocab);
        session
    }

    /// Install a freshly loaded list. Progress is reset and the pointer is
    /// re-randomized for the current mode.
    ///
    /// The review set is emptied too, so a reload while reviewing leaves no
    /// card until review mode is switched off.
    pub fn replace_vocab(&mut self, vocab: VocabList) {
        self.article_pool = vocab
            .iter()
            .enumerate()
            .filter(|(_, entry)| has_article(&entry.term))
            .map(|(idx, _)| idx)
            .collect();
        self.vocab = vocab;
        self.seen.clear();
        self.known.clear();
        self.review.clear();
        self.history.clear();
        self.current = None;
        self.clear_card_flags();

        match self.mode {
            Mode::ArticleOnly => self.enter_article_mode(),
            Mode::FullWord => {
                if self.phase() != Phase::Browsing(Mode::FullWord) {
                    return;
                }
                let idx = self.rng.random_range(0..self.vocab.len());
                self.current = Some(idx);
                self.seen.insert(idx);
            }
        }
    }

    /// Dispatch a command from any input channel.
    pub fn apply(&mut self, command: &Command) {
        match command {
            Command::Reveal => self.toggle_reveal(),
            Command::Next => self.advance(),
            Command::Back => self.retreat(),
            Command::MarkKnown => self.mark_known(),
            Command::MarkReview => self.mark_review(),
            Command::ToggleReview => self.toggle_review(),
            Command::SetMode(mode) => self.set_mode(*mode),
            Command::Guess(choice) => {
                self.guess_article(choice);
            }
        }
    }

    /// Switch display mode. Entering article mode picks a random articled
    /// term and restarts the history.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.clear_card_flags();

        match mode {
            Mode::ArticleOnly => self.enter_article_mode(),
            Mode::FullWord => {
                if let Some(idx) = self.current {
                    if self.phase() == Phase::Browsing(Mode::FullWord) {
                        self.seen.insert(idx);
                    }
                }
            }
        }
    }

    fn enter_article_mode(&mut self) {
        match pick(&mut self.rng, &self.article_pool) {
            Some(idx) => {
                self.current = Some(idx);
                self.history.reset(idx);
            }
            None => {
                self.current = None;
                self.history.clear();
            }
        }
    }

    /// Move to the next card. No-op when the active pool is empty.
    pub fn advance(&mut self) {
        match self.phase() {
            Phase::Idle => return,
            Phase::Browsing(Mode::ArticleOnly) => {
                if self.article_pool.is_empty() {
                    return;
                }
                let next = match self.history.forward() {
                    Some(idx) => idx,
                    None => {
                        let Some(idx) = pick(&mut self.rng, &self.article_pool) else {
                            return;
                        };
                        self.history.push(idx);
                        idx
                    }
                };
                self.current = Some(next);
            }
            Phase::Browsing(Mode::FullWord) => {
                let idx = self.rng.random_range(0..self.vocab.len());
                self.current = Some(idx);
                self.seen.insert(idx);
            }
            Phase::Reviewing => {
                let Some(idx) = pick(&mut self.rng, self.review.as_slice()) else {
                    return;
                };
                self.current = Some(idx);
            }
        }
        self.clear_card_flags();
    }

    /// Move back: exact undo through the history in article mode, otherwise
    /// the previously seen card (or no card once the start is reached).
    pub fn retreat(&mut self) {
        match self.phase() {
            Phase::Idle => return,
            Phase::Browsing(Mode::ArticleOnly) => {
                if let Some(idx) = self.history.back() {
                    self.current = Some(idx);
                }
            }
            Phase::Browsing(Mode::FullWord) | Phase::Reviewing => {
                self.current = self
                    .current
                    .and_then(|idx| self.seen.position(idx))
                    .and_then(|pos| pos.checked_sub(1))
                    .and_then(|pos| self.seen.get(pos));
            }
        }
        self.clear_card_flags();
    }

    pub fn toggle_reveal(&mut self) {
        if self.phase() == Phase::Idle {
            return;
        }
        self.revealed = !self.revealed;
    }

    /// Mark the current card as mastered and move on.
    pub fn mark_known(&mut self) {
        let Some(idx) = self.current else {
            return;
        };
        self.known.insert(idx);
        self.advance();
    }

    /// Mark the current card for revisiting and move on.
    pub fn mark_review(&mut self) {
        let Some(idx) = self.current else {
            return;
        };
        self.review.insert(idx);
        self.advance();
    }

    pub fn toggle_review(&mut self) {
        self.review_active = !self.review_active;
    }

    /// Record an article guess for the current card and reveal it.
    ///
    /// Only one guess per card; returns `None` outside article mode, without
    /// a card, or when a guess is already pending.
    pub fn guess_article(&mut self, choice: &str) -> Option<GuessOutcome> {
        if self.mode != Mode::ArticleOnly || self.guess.is_some() {
            return None;
        }
        let entry = self.current_entry()?;
        let outcome = check_guess(&entry.term, choice);
        self.guess = Some(choice.trim().to_lowercase());
        self.revealed = true;
        Some(outcome)
    }

    fn clear_card_flags(&mut self) {
        self.revealed = false;
        self.guess = None;
    }
}

impl<R> Session<R> {
    pub fn phase(&self) -> Phase {
        if self.vocab.is_empty() {
            Phase::Idle
        } else if self.review_active && self.mode == Mode::FullWord {
            Phase::Reviewing
        } else {
            Phase::Browsing(self.mode)
        }
    }

    pub fn vocab(&self) -> &VocabList {
        &self.vocab
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn current_entry(&self) -> Option<&VocabEntry> {
        self.current.and_then(|idx| self.vocab.get(idx))
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_review_active(&self) -> bool {
        self.review_active
    }

    pub fn pending_guess(&self) -> Option<&str> {
        self.guess.as_deref()
    }

    /// Outcome of the pending guess on the current card.
    pub fn guess_outcome(&self) -> Option<GuessOutcome> {
        let guess = self.guess.as_deref()?;
        let entry = self.current_entry()?;
        Some(check_guess(&entry.term, guess))
    }

    pub fn seen(&self) -> &OrderedIndexSet {
        &self.seen
    }

    pub fn known(&self) -> &OrderedIndexSet {
        &self.known
    }

    pub fn review(&self) -> &OrderedIndexSet {
        &self.review
    }

    pub fn history(&self) -> &ArticleHistory {
        &self.history
    }

    /// Indices eligible in article mode.
    pub fn article_pool(&self) -> &[usize] {
        &self.article_pool
    }

    /// Entries marked for review, in marking order.
    pub fn review_entries(&self) -> Vec<(usize, &VocabEntry)> {
        self.review
            .iter()
            .filter_map(|idx| self.vocab.get(idx).map(|entry| (idx, entry)))
            .collect()
    }

    pub fn progress(&self) -> Progress {
        Progress::new(
            self.seen.len(),
            self.known.len(),
            self.review.len(),
            self.vocab.valid_count(),
        )
    }
}
