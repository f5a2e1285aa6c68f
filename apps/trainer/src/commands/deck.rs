//! Views over the loaded list.

use super::Reply;
use crate::config::Config;
use crate::loader;
use crate::state::{AppState, View};
use vocab_core::parser::count_unique_terms;

pub fn review_list(state: &mut AppState) -> Reply {
    state.set_view(View::ReviewList);
    Reply::Render
}

pub fn stats(state: &mut AppState) -> Reply {
    state.set_view(View::Stats);
    Reply::Render
}

/// Count of distinct terms across the configured sources.
///
/// Blank sources contribute nothing and the fallback is not consulted.
pub async fn count_unique(config: &Config) -> usize {
    let sources = loader::resolve_sources(config).await;
    let client = reqwest::Client::builder().build().ok();

    let mut contents = Vec::with_capacity(sources.len());
    for spec in &sources {
        contents.push(loader::read_source(client.as_ref(), spec).await);
    }
    let count = count_unique_terms(&contents);
    tracing::debug!("{} unique terms in {} sources", count, sources.len());
    count
}
