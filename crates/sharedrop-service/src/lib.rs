//! # sharedrop-service
//!
//! The share resolution core. [`ShareService`] orchestrates the durable
//! share store, the short-lived code cache, and the transfer URL issuer
//! to create shares and resolve them by code, by id, or by origin.
//!
//! Services follow constructor injection: every backend is handed in at
//! construction time as an `Arc<dyn Trait>`, and connecting/closing those
//! backends is the caller's job.

pub mod context;
pub mod share;

pub use context::RequestContext;
pub use share::{CodeGenerator, CodeRegistry, CreateShareRequest, HealthReport, ShareService};
