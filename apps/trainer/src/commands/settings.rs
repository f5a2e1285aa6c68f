//! Theme preference.

use super::Reply;
use crate::state::AppState;
use vocab_core::Theme;

/// Switch to `theme`, or to the other theme when none is given, and persist.
pub fn theme(state: &mut AppState, theme: Option<Theme>) -> Reply {
    let theme = theme.unwrap_or_else(|| state.theme.toggled());
    state.set_theme(theme);
    state.set_status(format!("Theme: {}", theme.as_str()));
    tracing::info!("theme set to {}", theme.as_str());
    Reply::Render
}
