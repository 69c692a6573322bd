//! Persistence contract for the day's progress record.

use serde::{Deserialize, Serialize};

use crate::date::PuzzleDate;
use crate::state::{GameSession, GameState};

/// The single persisted record. Only the most recent day's record is ever
/// retained; a stale date means the record gets discarded, never migrated.
///
/// Field names match the on-disk JSON layout (`gameState`), so records
/// written by earlier builds keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedProgress {
    pub date: PuzzleDate,
    pub guesses: Vec<String>,
    #[serde(rename = "gameState")]
    pub game_state: GameState,
}

impl SavedProgress {
    /// Snapshot a session for persistence. The answer is intentionally not
    /// stored; it is re-derived from the date by the daily selector.
    #[must_use]
    pub fn of(session: &GameSession) -> Self {
        Self {
            date: session.date(),
            guesses: session.guesses().to_vec(),
            game_state: session.state(),
        }
    }
}

/// Trait for abstracting progress persistence.
/// Platform-specific implementations should provide this.
///
/// Persistence is a best-effort convenience: implementations must map
/// corrupt or unparsable stored data to `Ok(None)` rather than failing, and
/// callers treat any error as "no saved progress".
pub trait ProgressStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Overwrite the single record. Saving identical state twice is a no-op
    /// in effect.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn save(&self, record: &SavedProgress) -> Result<(), Self::Error>;

    /// Read the record, `None` when absent or unreadable.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage medium itself cannot be accessed.
    fn load(&self) -> Result<Option<SavedProgress>, Self::Error>;

    /// Remove the record. Removing an absent record is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be removed.
    fn delete(&self) -> Result<(), Self::Error>;
}
