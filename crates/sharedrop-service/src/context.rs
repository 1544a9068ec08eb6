//! Request context carrying the caller's origin address.

use serde::{Deserialize, Serialize};

/// Context for the current request.
///
/// Built by the transport layer and passed into service methods so every
/// operation knows which origin it acts for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Network address of the caller (possibly proxy-forwarded).
    pub origin_address: String,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(origin_address: impl Into<String>) -> Self {
        Self {
            origin_address: origin_address.into(),
        }
    }
}
