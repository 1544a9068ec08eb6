//! Core traits defined in `sharedrop-core` and implemented by other crates.

pub mod cache;
pub mod transfer;

pub use cache::CacheProvider;
pub use transfer::TransferUrlIssuer;
