//! Cache Item Module
//!
//! Payload types the mediator stores in its buffers.

use crate::buffer::Bufferable;

// == Page Item ==
/// Cached text of one wiki page, keyed by its title.
#[derive(Debug, Clone)]
pub struct PageItem {
    /// Page title (the cache id)
    pub title: String,
    /// Full page text
    pub text: String,
}

impl PageItem {
    /// Creates a new PageItem.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

impl Bufferable for PageItem {
    fn id(&self) -> &str {
        &self.title
    }
}

// == Search Item ==
/// Cached result list for one search query, keyed by the query string.
///
/// The limit the list was computed for is stored alongside it: a cached
/// list only satisfies requests asking for that many titles or fewer.
#[derive(Debug, Clone)]
pub struct SearchItem {
    /// The search query (the cache id)
    pub query: String,
    /// Matching page titles, best first
    pub titles: Vec<String>,
    /// The limit the titles were fetched with
    pub limit: usize,
}

impl SearchItem {
    /// Creates a new SearchItem.
    pub fn new(query: impl Into<String>, titles: Vec<String>, limit: usize) -> Self {
        Self {
            query: query.into(),
            titles,
            limit,
        }
    }
}

impl Bufferable for SearchItem {
    fn id(&self) -> &str {
        &self.query
    }
}
