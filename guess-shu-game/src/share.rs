//! Shareable result summary.

use crate::constants::{MAX_GUESSES, SHARE_TITLE};
use crate::state::{GameSession, GameState};

/// Render the share block for a finished session; `None` while still
/// playing. Won shows the guess count, lost shows `X`.
#[must_use]
pub fn share_text(session: &GameSession, link: &str) -> Option<String> {
    let (emoji, count) = match session.state() {
        GameState::Playing => return None,
        GameState::Won => ("📚", session.guesses().len().to_string()),
        GameState::Lost => ("📖", "X".to_string()),
    };
    Some(format!(
        "{SHARE_TITLE} {}\n{emoji} {count}/{MAX_GUESSES}\n\n{link}",
        session.date()
    ))
}
