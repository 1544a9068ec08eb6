//! # sharedrop-api
//!
//! HTTP API layer for ShareDrop built on Axum.
//!
//! A thin adapter over [`ShareService`](sharedrop_service::ShareService):
//! it derives the caller's origin address, maps request bodies onto
//! service calls, and wraps every answer in the `{ success, response }`
//! envelope.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
