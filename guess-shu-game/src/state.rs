//! The guess-evaluation state machine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::CatalogEntry;
use crate::constants::MAX_GUESSES;
use crate::date::PuzzleDate;
use crate::progress::SavedProgress;

/// Where the day's game stands. Monotonic: `Playing` may move to `Won` or
/// `Lost`, both of which are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameState {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "playing" => Ok(Self::Playing),
            "won" => Ok(Self::Won),
            "lost" => Ok(Self::Lost),
            _ => Err(()),
        }
    }
}

/// What a single [`GameSession::submit_guess`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess matched; the session is over.
    Won,
    /// The guess was wrong and it was the last one allowed.
    Lost,
    /// The guess was wrong; the session continues. The presentation layer
    /// should show its notice for [`crate::constants::INCORRECT_NOTICE_DURATION`]
    /// and then clear it.
    Incorrect,
    /// Empty input or a guess after the game ended; nothing was recorded.
    Ignored,
}

impl GuessOutcome {
    /// Whether the guess was recorded (and the session therefore mutated).
    #[must_use]
    pub const fn accepted(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// One day's game. The answer is fixed at construction; guesses are
/// append-only and never rewritten, including the winning or losing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    answer: CatalogEntry,
    guesses: Vec<String>,
    state: GameState,
    date: PuzzleDate,
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

impl GameSession {
    /// A fresh session: no guesses, `Playing`.
    #[must_use]
    pub const fn fresh(date: PuzzleDate, answer: CatalogEntry) -> Self {
        Self {
            answer,
            guesses: Vec::new(),
            state: GameState::Playing,
            date,
        }
    }

    /// Rebuild a session from a same-day progress record. The answer comes
    /// from the daily selector, never from storage.
    #[must_use]
    pub fn restore(answer: CatalogEntry, saved: SavedProgress) -> Self {
        Self {
            answer,
            guesses: saved.guesses,
            state: saved.game_state,
            date: saved.date,
        }
    }

    #[must_use]
    pub const fn answer(&self) -> CatalogEntry {
        self.answer
    }

    /// Every submitted guess in insertion order, untrimmed as typed.
    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn date(&self) -> PuzzleDate {
        self.date
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.guesses.len())
    }

    /// Evaluate one guess.
    ///
    /// Matching is a case-insensitive, whitespace-trimmed exact comparison
    /// against the answer title; nothing fuzzier. Empty input and guesses
    /// after a terminal state are rejected silently with no mutation. Every
    /// accepted call appends exactly one entry to the guess history.
    pub fn submit_guess(&mut self, raw: &str) -> GuessOutcome {
        if self.state.is_terminal() || raw.trim().is_empty() {
            return GuessOutcome::Ignored;
        }

        // Record the original text for the on-screen history.
        self.guesses.push(raw.to_string());

        if normalize(raw) == normalize(self.answer.title) {
            self.state = GameState::Won;
            GuessOutcome::Won
        } else if self.guesses.len() >= MAX_GUESSES {
            self.state = GameState::Lost;
            GuessOutcome::Lost
        } else {
            GuessOutcome::Incorrect
        }
    }
}
