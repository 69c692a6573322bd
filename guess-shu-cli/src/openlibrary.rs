//! OpenLibrary metadata resolver.
//!
//! One search request per day, fire-and-forget: any failure here degrades
//! to "no enrichment" and the game plays on with title and author only.

use std::time::Duration;

use async_trait::async_trait;
use guess_shu_game::{EnrichmentData, MetadataResolver, subject_display};
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://openlibrary.org";
const SEARCH_LIMIT: &str = "5";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum OpenLibraryError {
    #[error("metadata request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Vec<SearchDoc>,
}

#[derive(Debug, Deserialize)]
struct SearchDoc {
    title: Option<String>,
    cover_i: Option<i64>,
    first_publish_year: Option<i32>,
    #[serde(default)]
    subject: Vec<String>,
    #[serde(default)]
    first_sentence: Vec<String>,
}

pub struct OpenLibraryResolver {
    client: reqwest::Client,
    base_url: String,
}

impl OpenLibraryResolver {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self, OpenLibraryError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    #[cfg(test)]
    fn with_base_url(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Prefer the doc whose title matches exactly (case-insensitive), else
    /// take the first hit.
    fn best_match<'a>(docs: &'a [SearchDoc], title: &str) -> Option<&'a SearchDoc> {
        docs.iter()
            .find(|doc| {
                doc.title
                    .as_deref()
                    .is_some_and(|t| t.eq_ignore_ascii_case(title))
            })
            .or_else(|| docs.first())
    }
}

#[async_trait]
impl MetadataResolver for OpenLibraryResolver {
    type Error = OpenLibraryError;

    async fn lookup(&self, title: &str) -> Result<Option<EnrichmentData>, Self::Error> {
        let url = format!("{}/search.json", self.base_url);
        let response: SearchResponse = self
            .client
            .get(&url)
            .query(&[("q", title), ("limit", SEARCH_LIMIT)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(Self::best_match(&response.docs, title).map(|doc| EnrichmentData {
            cover_id: doc.cover_i,
            first_publish_year: doc.first_publish_year,
            subject: subject_display(&doc.subject),
            description: doc.first_sentence.first().cloned(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(title: &str, cover: Option<i64>) -> SearchDoc {
        SearchDoc {
            title: Some(title.to_string()),
            cover_i: cover,
            first_publish_year: None,
            subject: Vec::new(),
            first_sentence: Vec::new(),
        }
    }

    #[test]
    fn exact_title_match_wins_over_the_first_hit() {
        let docs = vec![doc("Atonement: A Novel", Some(1)), doc("atonement", Some(2))];
        let best = OpenLibraryResolver::best_match(&docs, "Atonement").unwrap();
        assert_eq!(best.cover_i, Some(2));
    }

    #[test]
    fn falls_back_to_the_first_doc() {
        let docs = vec![doc("Something Else", Some(7))];
        let best = OpenLibraryResolver::best_match(&docs, "Atonement").unwrap();
        assert_eq!(best.cover_i, Some(7));
    }

    #[test]
    fn no_docs_means_no_match() {
        assert!(OpenLibraryResolver::best_match(&[], "Atonement").is_none());
    }

    #[test]
    fn search_doc_tolerates_sparse_payloads() {
        let parsed: SearchResponse = serde_json::from_str(
            r#"{"docs":[{"title":"Sula","cover_i":99,"first_publish_year":1973,
                "subject":["Fiction","Ohio","Friendship","Race"],
                "first_sentence":["In that place, ..."]},
               {}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.docs.len(), 2);
        assert_eq!(parsed.docs[0].cover_i, Some(99));
        assert!(parsed.docs[1].title.is_none());
        assert!(parsed.docs[1].subject.is_empty());
    }

    #[tokio::test]
    async fn unreachable_service_reports_an_error_not_a_panic() {
        let resolver =
            OpenLibraryResolver::with_base_url("http://127.0.0.1:1/closed".to_string());
        assert!(resolver.lookup("Atonement").await.is_err());
    }
}
