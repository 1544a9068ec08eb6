//! Response DTOs.

use serde::{Deserialize, Serialize};

use sharedrop_entity::share::{Share, ShareCreated};

/// Standard response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data, an error message, or `null`.
    pub response: T,
}

impl<T: Serialize> ApiEnvelope<T> {
    /// Creates a successful response.
    pub fn ok(response: T) -> Self {
        Self {
            success: true,
            response,
        }
    }

    /// Creates a failed response.
    pub fn failed(response: T) -> Self {
        Self {
            success: false,
            response,
        }
    }
}

/// Created share with its code and, for files, the upload URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShareResponse {
    /// The stored share.
    pub docs: Share,
    /// Short code; `null` when registration failed.
    pub code: Option<String>,
    /// Signed upload URL for file shares.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_url: Option<String>,
}

impl From<ShareCreated> for CreateShareResponse {
    fn from(created: ShareCreated) -> Self {
        Self {
            docs: created.share,
            code: created.code,
            signed_url: created.upload_url,
        }
    }
}

/// Purge result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PurgeResponse {
    /// Number of shares removed.
    pub count: u64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Share store reachable.
    pub store: bool,
    /// Code cache reachable.
    pub cache: bool,
}
