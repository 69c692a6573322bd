//! Cover obscurity and title masking, derived purely from session state.
//!
//! Nothing here is stored; the presentation layer recomputes both values
//! after every state change.

use crate::constants::{OBSCURITY_MAX, OBSCURITY_STEP};
use crate::state::{GameSession, GameState};

/// Visual obscurity of the cover, in `[0, OBSCURITY_MAX]`.
///
/// Zero once the game is over (fully revealed); otherwise each recorded
/// guess sheds [`OBSCURITY_STEP`]. Monotonically non-increasing in guess
/// count.
#[must_use]
pub fn obscurity_level(session: &GameSession) -> u8 {
    if session.state() != GameState::Playing {
        return 0;
    }
    let shed = u8::try_from(session.guesses().len())
        .unwrap_or(u8::MAX)
        .saturating_mul(OBSCURITY_STEP);
    OBSCURITY_MAX.saturating_sub(shed)
}

/// The answer title with every non-whitespace character replaced by a
/// placeholder glyph. Word boundaries and length show; letters don't.
#[must_use]
pub fn masked_title(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_whitespace() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;
    use crate::date::PuzzleDate;

    fn session() -> GameSession {
        GameSession::fresh(PuzzleDate::epoch(), CATALOG[5])
    }

    #[test]
    fn obscurity_sheds_per_guess() {
        let mut session = session();
        let mut expected = [40, 32, 24, 16].into_iter();
        assert_eq!(obscurity_level(&session), expected.next().unwrap());
        for wrong in ["a", "b", "c"] {
            session.submit_guess(wrong);
            assert_eq!(obscurity_level(&session), expected.next().unwrap());
        }
    }

    #[test]
    fn obscurity_is_monotonic_and_bottoms_out() {
        let mut session = session();
        let mut previous = obscurity_level(&session);
        for wrong in ["a", "b", "c", "d", "e"] {
            session.submit_guess(wrong);
            let level = obscurity_level(&session);
            assert!(level <= previous);
            previous = level;
        }
        assert_eq!(obscurity_level(&session), 0);
    }

    #[test]
    fn terminal_state_reveals_fully() {
        let mut session = session();
        session.submit_guess("Atonement");
        assert_eq!(obscurity_level(&session), 0);
    }

    #[test]
    fn mask_keeps_word_boundaries_only() {
        assert_eq!(masked_title("The Odyssey"), "___ _______");
        assert_eq!(masked_title("A Room of One's Own"), "_ ____ __ _____ ___");
        assert_eq!(masked_title("Sula"), "____");
    }
}
