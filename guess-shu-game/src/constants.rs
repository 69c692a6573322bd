//! Centralized tuning constants for the Guess Shu core.
//!
//! Keeping them together ensures the game can only be re-tuned via code
//! changes reviewed in version control.

use std::time::Duration;

/// Maximum number of guesses per daily puzzle.
pub const MAX_GUESSES: usize = 5;

/// Obscurity level of the cover before any guess is made.
pub const OBSCURITY_MAX: u8 = 40;

/// Obscurity shed per recorded guess.
pub const OBSCURITY_STEP: u8 = 8;

/// How long the presentation layer should keep a transient "incorrect"
/// notice on screen before clearing it. A display-timing contract, not a
/// state-machine state.
pub const INCORRECT_NOTICE_DURATION: Duration = Duration::from_secs(2);

/// The fixed slot under which the day's progress record is persisted.
/// Only the most recent day's record is ever retained.
pub const STORAGE_KEY: &str = "guessShu";

/// At most this many subject tags are joined into the display string.
pub const SUBJECT_DISPLAY_LIMIT: usize = 3;

/// Base URL for resolving a cover identifier to a cover image.
pub const COVERS_URL_BASE: &str = "https://covers.openlibrary.org/b/id";

/// Title line prefix of the share summary.
pub const SHARE_TITLE: &str = "Guess Shu";
