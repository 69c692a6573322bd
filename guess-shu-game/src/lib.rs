//! Guess Shu Game Engine
//!
//! Platform-agnostic core logic for the Guess Shu daily book-guessing game.
//! This crate provides the daily-puzzle selection, the guess-evaluation
//! state machine, reveal progression, and the persistence contract, without
//! UI or platform-specific dependencies.

pub mod catalog;
pub mod constants;
pub mod date;
pub mod enrichment;
pub mod progress;
pub mod reveal;
pub mod share;
pub mod state;

// Re-export commonly used types
pub use catalog::{CATALOG, CatalogEntry};
pub use constants::{INCORRECT_NOTICE_DURATION, MAX_GUESSES, OBSCURITY_MAX, OBSCURITY_STEP};
pub use date::{PuzzleDate, select_for_date, select_today};
pub use enrichment::{EnrichmentData, MetadataResolver, cover_url, subject_display};
pub use progress::{ProgressStore, SavedProgress};
pub use reveal::{masked_title, obscurity_level};
pub use share::share_text;
pub use state::{GameSession, GameState, GuessOutcome};

/// Ties the daily selector, the guess engine, and a progress store together
/// for one device.
///
/// All transitions here are synchronous and serialized; the only suspending
/// operation in the system — the metadata lookup — runs outside this type
/// and never touches the session.
pub struct DailyGame<S>
where
    S: ProgressStore,
{
    store: S,
}

impl<S> DailyGame<S>
where
    S: ProgressStore,
{
    /// Create an engine over the provided progress store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Start or resume the session for `date`.
    ///
    /// A stored record from the same date restores the guess list and state;
    /// a record from any other date is deleted outright so stale data never
    /// leaks into the new day. Storage failures fall back to a fresh session
    /// because persistence is never a correctness requirement for play.
    pub fn start_session(&self, date: PuzzleDate) -> GameSession {
        let answer = select_for_date(date);
        match self.store.load() {
            Ok(Some(saved)) if saved.date == date => GameSession::restore(answer, saved),
            Ok(Some(stale)) => {
                log::debug!("discarding progress from {}", stale.date);
                if let Err(err) = self.store.delete() {
                    log::warn!("failed to clear stale progress: {err}");
                }
                GameSession::fresh(date, answer)
            }
            Ok(None) => GameSession::fresh(date, answer),
            Err(err) => {
                log::warn!("failed to load saved progress: {err}");
                GameSession::fresh(date, answer)
            }
        }
    }

    /// Start or resume today's session.
    pub fn start_today(&self) -> GameSession {
        self.start_session(PuzzleDate::today())
    }

    /// Submit a guess and persist the session after every accepted mutation.
    /// A save failure is logged, never surfaced: the in-memory session stays
    /// authoritative.
    pub fn submit_guess(&self, session: &mut GameSession, raw: &str) -> GuessOutcome {
        let outcome = session.submit_guess(raw);
        if outcome.accepted()
            && let Err(err) = self.store.save(&SavedProgress::of(session))
        {
            log::warn!("failed to persist progress: {err}");
        }
        outcome
    }

    /// Access the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }
}
