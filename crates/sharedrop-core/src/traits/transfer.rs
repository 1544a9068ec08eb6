//! Transfer URL issuer trait for direct-to-object-storage transfers.

use async_trait::async_trait;

use crate::result::AppResult;

/// Mints time-boxed, method-scoped signed URLs for a fixed bucket.
///
/// Implementations never move object bytes themselves. Both methods fail
/// with [`ErrorKind::SigningFailed`](crate::error::ErrorKind::SigningFailed)
/// when the credential or region configuration is unusable.
#[async_trait]
pub trait TransferUrlIssuer: Send + Sync + std::fmt::Debug + 'static {
    /// Issue a URL permitting a single private write of arbitrary binary
    /// content to `object_key`.
    async fn issue_upload_url(&self, object_key: &str) -> AppResult<String>;

    /// Issue a URL permitting a single read of `object_key`.
    async fn issue_download_url(&self, object_key: &str) -> AppResult<String>;
}
