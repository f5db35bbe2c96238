//! Wiki Mediator Module
//!
//! The mediator wraps a remote content source with two buffers and
//! answers analytics queries from its request log. The caching pattern
//! is get-or-compute-then-put: attempt the buffer first, fall back to the
//! source on a miss, and re-insert what the source produced.

use tracing::debug;

use crate::buffer::SharedBuffer;
use crate::error::{BufferError, Result};
use crate::mediator::{ContentSource, PageItem, RequestLog, SearchItem};

// == Wiki Mediator ==
/// Caching front for a wiki content source.
///
/// Holds one buffer keyed by page title (caching page text) and one keyed
/// by search query (caching the result list alongside the limit it was
/// computed for). Clones share the same buffers and log.
#[derive(Debug, Clone)]
pub struct WikiMediator<S> {
    /// The remote source consulted on cache misses
    source: S,
    /// Page-text cache keyed by title
    pages: SharedBuffer<PageItem>,
    /// Search-result cache keyed by query
    searches: SharedBuffer<SearchItem>,
    /// Request log backing the analytics operations
    log: RequestLog,
}

impl<S: ContentSource> WikiMediator<S> {
    // == Constructor ==
    /// Creates a mediator whose two buffers share the given capacity and
    /// timeout.
    pub fn new(source: S, cache_capacity: usize, cache_timeout_secs: u64) -> Self {
        Self {
            source,
            pages: SharedBuffer::new(cache_capacity, cache_timeout_secs),
            searches: SharedBuffer::new(cache_capacity, cache_timeout_secs),
            log: RequestLog::new(),
        }
    }

    // == Search ==
    /// Returns up to `limit` page titles matching `query`.
    ///
    /// A cached result satisfies the request only if it was computed for
    /// at least as large a limit; a narrower cached result is recomputed
    /// from the source and replaced in place with `update`.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        self.log.record_query(query);

        match self.searches.get(query) {
            Ok(cached) if cached.limit >= limit => {
                debug!("search cache hit: query={:?} limit={}", query, limit);
                Ok(cached.titles.into_iter().take(limit).collect())
            }
            Ok(cached) => {
                debug!(
                    "search cache hit too narrow: query={:?} cached_limit={} limit={}",
                    query, cached.limit, limit
                );
                let titles = self.source.search(query, limit).await?;
                self.searches
                    .update(SearchItem::new(query, titles.clone(), limit));
                Ok(titles)
            }
            Err(BufferError::NotFound(_)) => {
                debug!("search cache miss: query={:?} limit={}", query, limit);
                let titles = self.source.search(query, limit).await?;
                self.searches
                    .put(SearchItem::new(query, titles.clone(), limit));
                Ok(titles)
            }
        }
    }

    // == Page Text ==
    /// Returns the full text of the page with the given title.
    pub async fn page_text(&self, title: &str) -> Result<String> {
        self.log.record_query(title);

        match self.pages.get(title) {
            Ok(cached) => {
                debug!("page cache hit: title={:?}", title);
                Ok(cached.text)
            }
            Err(BufferError::NotFound(_)) => {
                debug!("page cache miss: title={:?}", title);
                let text = self.source.page_text(title).await?;
                self.pages.put(PageItem::new(title, text.clone()));
                Ok(text)
            }
        }
    }

    // == Zeitgeist ==
    /// Returns up to `limit` query strings ranked by all-time request
    /// count, most requested first.
    pub fn zeitgeist(&self, limit: usize) -> Vec<String> {
        self.log.record_load();
        self.log.zeitgeist(limit)
    }

    // == Trending ==
    /// Returns up to `limit` distinct query strings requested in the last
    /// 30 seconds, most recent first.
    pub fn trending(&self, limit: usize) -> Vec<String> {
        self.log.record_load();
        self.log.trending(limit)
    }

    // == Peak Load ==
    /// Returns the maximum number of requests observed in any 30-second
    /// window, counting this call itself.
    pub fn peak_load_30s(&self) -> usize {
        self.log.record_load();
        self.log.peak_load_30s()
    }

    // == Buffer Access ==
    /// The page-text buffer (exposed for stats reporting).
    pub fn pages(&self) -> &SharedBuffer<PageItem> {
        &self.pages
    }

    /// The search-result buffer (exposed for stats reporting).
    pub fn searches(&self) -> &SharedBuffer<SearchItem> {
        &self.searches
    }
}
