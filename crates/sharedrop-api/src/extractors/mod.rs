//! Custom Axum extractors.

pub mod origin;
pub mod path;

pub use origin::ClientOrigin;
pub use path::parse_uuid;
