//! Wiki Mediator - a caching front for a remote wiki
//!
//! Centered on a finite-space finite-time buffer: a bounded cache that
//! evicts the least recently used entry when full and drops entries that
//! go unrefreshed past a timeout.

pub mod api;
pub mod buffer;
pub mod config;
pub mod error;
pub mod mediator;
pub mod models;

pub use api::AppState;
pub use buffer::{Bufferable, FsftBuffer, SharedBuffer};
pub use config::Config;
pub use mediator::WikiMediator;
