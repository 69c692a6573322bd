//! Calendar dates and the deterministic daily selector.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{CATALOG, CatalogEntry};

/// Rotation epoch: day zero of the catalog cycle.
const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2025, 1, 1) {
    Some(date) => date,
    None => panic!("epoch date is statically valid"),
};

/// A calendar date in canonical `YYYY-MM-DD` form, taken from the device's
/// local clock. Used both to select the day's answer and to key persisted
/// progress, so two sessions on the same date always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PuzzleDate(NaiveDate);

impl PuzzleDate {
    /// Today according to the device-local clock.
    #[must_use]
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// The fixed rotation epoch.
    #[must_use]
    pub const fn epoch() -> Self {
        Self(EPOCH)
    }

    /// Build a date from components; `None` when they don't form a real date.
    #[must_use]
    pub const fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => Some(Self(date)),
            None => None,
        }
    }

    /// Index into the catalog for this date.
    ///
    /// `rem_euclid` keeps the index well-defined for dates before the epoch
    /// as well; the rotation simply runs backwards through the same cycle.
    #[must_use]
    pub fn day_index(self) -> usize {
        let days = self.0.signed_duration_since(EPOCH).num_days();
        let len = CATALOG.len() as i64;
        usize::try_from(days.rem_euclid(len)).unwrap_or(0)
    }
}

impl fmt::Display for PuzzleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for PuzzleDate {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(Self)
    }
}

/// The answer for a given date. Pure function of the date, the fixed epoch,
/// and the fixed catalog: same date yields the same entry on any device,
/// without network access. Cycles through the whole catalog before repeating.
#[must_use]
pub fn select_for_date(date: PuzzleDate) -> CatalogEntry {
    CATALOG[date.day_index()]
}

/// Today's answer.
#[must_use]
pub fn select_today() -> CatalogEntry {
    select_for_date(PuzzleDate::today())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> PuzzleDate {
        s.parse().unwrap()
    }

    #[test]
    fn epoch_selects_the_first_entry() {
        assert_eq!(PuzzleDate::epoch().day_index(), 0);
        assert_eq!(select_for_date(PuzzleDate::epoch()), CATALOG[0]);
    }

    #[test]
    fn selection_is_deterministic() {
        let d = date("2025-03-14");
        assert_eq!(select_for_date(d), select_for_date(d));
    }

    #[test]
    fn consecutive_dates_walk_the_catalog() {
        assert_eq!(date("2025-01-02").day_index(), 1);
        assert_eq!(date("2025-01-06").day_index(), 5);
        assert_eq!(select_for_date(date("2025-01-06")).title, "Atonement");
    }

    #[test]
    fn cycle_wraps_after_one_catalog_length() {
        assert_eq!(date("2025-01-31").day_index(), 0);
        assert_eq!(
            select_for_date(date("2025-01-31")),
            select_for_date(date("2025-01-01"))
        );
    }

    #[test]
    fn dates_within_one_window_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for day in 1..=30 {
            let d = PuzzleDate::from_ymd(2025, 1, day).unwrap();
            assert!(seen.insert(select_for_date(d).title));
        }
    }

    #[test]
    fn pre_epoch_dates_still_select() {
        // One day before the epoch lands on the last catalog slot.
        assert_eq!(date("2024-12-31").day_index(), CATALOG.len() - 1);
    }

    #[test]
    fn canonical_string_round_trips() {
        let d = date("2025-07-09");
        assert_eq!(d.to_string(), "2025-07-09");
        assert_eq!(d.to_string().parse::<PuzzleDate>().unwrap(), d);
    }

    #[test]
    fn rejects_non_canonical_strings() {
        assert!("01/02/2025".parse::<PuzzleDate>().is_err());
        assert!("not-a-date".parse::<PuzzleDate>().is_err());
    }
}
