//! Display enrichment fetched from a book-metadata service.
//!
//! Enrichment never feeds game logic. The lookup runs independently of the
//! state machine; when it fails or finds nothing, every field stays absent
//! and the presentation layer falls back to placeholders.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::constants::{COVERS_URL_BASE, SUBJECT_DISPLAY_LIMIT};

/// Optional display data for today's answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentData {
    pub cover_id: Option<i64>,
    pub first_publish_year: Option<i32>,
    pub subject: Option<String>,
    pub description: Option<String>,
}

/// Trait for abstracting the metadata lookup.
/// Platform-specific implementations should provide this.
#[async_trait]
pub trait MetadataResolver {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Look up enrichment for a title. `Ok(None)` when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or parse failure; callers log it and
    /// proceed with no enrichment rather than surfacing it to the player.
    async fn lookup(&self, title: &str) -> Result<Option<EnrichmentData>, Self::Error>;
}

/// Deterministic cover image URL for a cover identifier.
#[must_use]
pub fn cover_url(cover_id: i64) -> String {
    format!("{COVERS_URL_BASE}/{cover_id}-L.jpg")
}

/// Join at most the first [`SUBJECT_DISPLAY_LIMIT`] subject tags into one
/// display string.
#[must_use]
pub fn subject_display(subjects: &[String]) -> Option<String> {
    if subjects.is_empty() {
        return None;
    }
    Some(
        subjects
            .iter()
            .take(SUBJECT_DISPLAY_LIMIT)
            .cloned()
            .collect::<Vec<_>>()
            .join(", "),
    )
}
