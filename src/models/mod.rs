//! Data Models Module
//!
//! Request and response DTOs for the mediator server API.

pub mod requests;
pub mod responses;

pub use requests::{LimitParams, SearchParams};
pub use responses::{
    HealthResponse, PageResponse, PeakLoadResponse, RankingResponse, SearchResponse, StatsResponse,
};
