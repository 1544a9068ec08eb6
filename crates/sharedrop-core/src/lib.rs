//! # sharedrop-core
//!
//! Core crate for ShareDrop. Contains the configuration schema, the
//! seams other crates implement (cache provider, transfer URL issuer),
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other ShareDrop crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
