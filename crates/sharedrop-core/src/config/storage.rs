//! Object storage configuration.

use serde::{Deserialize, Serialize};

/// Top-level storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// S3-compatible object storage used for file shares.
    #[serde(default)]
    pub s3: S3StorageConfig,
}

/// S3-compatible object storage configuration.
///
/// File bytes never pass through ShareDrop; this only configures the
/// client that signs direct upload/download URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3StorageConfig {
    /// S3 bucket name.
    #[serde(default)]
    pub bucket: String,
    /// AWS region.
    #[serde(default = "default_region")]
    pub region: String,
    /// Endpoint URL for non-AWS services like MinIO. Empty means AWS.
    #[serde(default)]
    pub endpoint: String,
    /// Access key ID. Empty means the default AWS credential chain.
    #[serde(default)]
    pub access_key: String,
    /// Secret access key.
    #[serde(default)]
    pub secret_key: String,
    /// Validity of upload URLs in seconds.
    #[serde(default = "default_expiry")]
    pub upload_expiry_seconds: u64,
    /// Validity of download URLs in seconds.
    #[serde(default = "default_expiry")]
    pub download_expiry_seconds: u64,
    /// Content type the upload URL is signed for.
    #[serde(default = "default_upload_content_type")]
    pub upload_content_type: String,
}

impl Default for S3StorageConfig {
    fn default() -> Self {
        Self {
            bucket: String::new(),
            region: default_region(),
            endpoint: String::new(),
            access_key: String::new(),
            secret_key: String::new(),
            upload_expiry_seconds: default_expiry(),
            download_expiry_seconds: default_expiry(),
            upload_content_type: default_upload_content_type(),
        }
    }
}

impl S3StorageConfig {
    /// Whether static credentials were configured.
    pub fn has_static_credentials(&self) -> bool {
        !self.access_key.is_empty() && !self.secret_key.is_empty()
    }
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_expiry() -> u64 {
    300
}

fn default_upload_content_type() -> String {
    "application/octet-stream".to_string()
}
