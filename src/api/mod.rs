//! API Module
//!
//! HTTP handlers and routing for the mediator server REST API.
//!
//! # Endpoints
//! - `GET /search?q=&limit=` - Search for page titles
//! - `GET /page/:title` - Retrieve a page's text
//! - `GET /zeitgeist?limit=` - All-time most requested strings
//! - `GET /trending?limit=` - Most recent distinct requests (30s window)
//! - `GET /peak-load` - Peak request count in any 30s window
//! - `GET /stats` - Buffer statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
