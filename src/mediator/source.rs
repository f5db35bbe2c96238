//! Content Source Module
//!
//! The seam between the mediator and the remote read-only wiki, plus the
//! MediaWiki-backed implementation.

use std::collections::HashMap;
use std::future::Future;

use serde::Deserialize;
use tracing::debug;

use crate::error::SourceError;

// == Content Source Trait ==
/// A remote, read-only source of wiki content.
///
/// The mediator calls this only on cache misses (or when a cached search
/// result was computed for a smaller limit than requested).
pub trait ContentSource: Send + Sync {
    /// Returns up to `limit` page titles matching `query`, best first.
    fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<String>, SourceError>> + Send;

    /// Returns the full text of the page with the given title.
    fn page_text(&self, title: &str) -> impl Future<Output = Result<String, SourceError>> + Send;
}

// == Wiki Source ==
/// [`ContentSource`] backed by the MediaWiki action API.
#[derive(Debug, Clone)]
pub struct WikiSource {
    client: reqwest::Client,
    api_url: String,
}

impl WikiSource {
    /// Creates a source talking to the given `api.php` endpoint.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }
}

impl ContentSource for WikiSource {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<String>, SourceError> {
        debug!("wiki search: query={:?} limit={}", query, limit);

        let response: SearchEnvelope = self
            .client
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", query),
                ("srlimit", &limit.to_string()),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response
            .query
            .search
            .into_iter()
            .map(|hit| hit.title)
            .collect())
    }

    async fn page_text(&self, title: &str) -> Result<String, SourceError> {
        debug!("wiki page fetch: title={:?}", title);

        let response: PagesEnvelope = self
            .client
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("prop", "extracts"),
                ("explaintext", "1"),
                ("titles", title),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let page = response
            .query
            .pages
            .into_values()
            .next()
            .ok_or_else(|| SourceError::PageMissing(title.to_string()))?;

        if page.missing.is_some() {
            return Err(SourceError::PageMissing(title.to_string()));
        }

        page.extract
            .ok_or_else(|| SourceError::PageMissing(title.to_string()))
    }
}

// == Wire Models ==
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    query: SearchQuery,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Deserialize)]
struct PagesEnvelope {
    query: PagesQuery,
}

#[derive(Debug, Deserialize)]
struct PagesQuery {
    pages: HashMap<String, PageNode>,
}

#[derive(Debug, Deserialize)]
struct PageNode {
    extract: Option<String>,
    /// Present (as an empty marker) when the title does not exist
    missing: Option<serde_json::Value>,
}
