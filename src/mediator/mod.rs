//! Mediator Module
//!
//! Fronts a remote, latency-bearing wiki source with two buffers (page
//! text and search results) and keeps a request log for analytics.

mod items;
mod log;
mod source;
mod wiki;

// Re-export public types
pub use items::{PageItem, SearchItem};
pub use log::RequestLog;
pub use source::{ContentSource, WikiSource};
pub use wiki::WikiMediator;
