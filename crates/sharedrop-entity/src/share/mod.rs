//! Share domain entities.

pub mod content;
pub mod content_type;
pub mod model;

pub use content::{ShareContent, ShareCreated};
pub use content_type::ShareContentType;
pub use model::{CreateShare, Share};
