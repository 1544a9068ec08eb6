//! # sharedrop-storage
//!
//! Object storage integration for ShareDrop. File bytes never pass through
//! the service: this crate only names objects and signs time-boxed URLs
//! that let clients talk to the bucket directly.

pub mod object_key;
pub mod providers;

pub use object_key::object_key_for;
#[cfg(feature = "s3")]
pub use providers::S3TransferIssuer;
