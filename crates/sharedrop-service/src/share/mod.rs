//! Share creation and resolution.

pub mod codes;
pub mod registry;
pub mod service;

pub use codes::CodeGenerator;
pub use registry::CodeRegistry;
pub use service::{CreateShareRequest, HealthReport, ShareService};
