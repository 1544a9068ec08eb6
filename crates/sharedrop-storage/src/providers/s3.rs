//! S3-compatible presigned transfer URL issuer.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Builder, Credentials, Region};
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::types::ObjectCannedAcl;

use sharedrop_core::config::storage::S3StorageConfig;
use sharedrop_core::error::{AppError, ErrorKind};
use sharedrop_core::result::AppResult;
use sharedrop_core::traits::transfer::TransferUrlIssuer;

/// Signs upload and download URLs against a single configured bucket.
///
/// Signing happens locally from the configured credentials; no request
/// reaches S3 until the client uses the URL.
#[derive(Debug, Clone)]
pub struct S3TransferIssuer {
    client: Client,
    bucket: String,
    upload_expiry: Duration,
    download_expiry: Duration,
    upload_content_type: String,
}

impl S3TransferIssuer {
    /// Create a new issuer from configuration.
    ///
    /// Static credentials are used when both keys are configured;
    /// otherwise the default AWS credential chain is loaded.
    pub async fn new(config: &S3StorageConfig) -> AppResult<Self> {
        if config.bucket.is_empty() {
            return Err(AppError::configuration("S3 bucket must be configured"));
        }

        tracing::info!(
            region = %config.region,
            bucket = %config.bucket,
            endpoint = %config.endpoint,
            static_credentials = config.has_static_credentials(),
            "Initializing S3 transfer URL issuer"
        );

        let region = Region::new(config.region.clone());
        let mut builder = if config.has_static_credentials() {
            let credentials = Credentials::new(
                config.access_key.clone(),
                config.secret_key.clone(),
                None,
                None,
                "sharedrop-config",
            );
            Builder::new()
                .behavior_version(BehaviorVersion::latest())
                .region(region)
                .credentials_provider(credentials)
        } else {
            let shared = aws_config::defaults(BehaviorVersion::latest())
                .region(region)
                .load()
                .await;
            Builder::from(&shared)
        };

        if !config.endpoint.is_empty() {
            builder = builder
                .endpoint_url(config.endpoint.clone())
                .force_path_style(true);
        }

        Ok(Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
            upload_expiry: Duration::from_secs(config.upload_expiry_seconds),
            download_expiry: Duration::from_secs(config.download_expiry_seconds),
            upload_content_type: config.upload_content_type.clone(),
        })
    }

    fn presigning(expiry: Duration) -> AppResult<PresigningConfig> {
        PresigningConfig::expires_in(expiry).map_err(|e| {
            AppError::with_source(ErrorKind::SigningFailed, "Invalid presigning expiry", e)
        })
    }
}

#[async_trait]
impl TransferUrlIssuer for S3TransferIssuer {
    async fn issue_upload_url(&self, object_key: &str) -> AppResult<String> {
        let request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(object_key)
            .acl(ObjectCannedAcl::Private)
            .content_type(&self.upload_content_type)
            .presigned(Self::presigning(self.upload_expiry)?)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::SigningFailed, "Failed to sign upload URL", e)
            })?;

        tracing::debug!(object_key, bucket = %self.bucket, "Signed upload URL");
        Ok(request.uri().to_string())
    }

    async fn issue_download_url(&self, object_key: &str) -> AppResult<String> {
        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(object_key)
            .presigned(Self::presigning(self.download_expiry)?)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::SigningFailed, "Failed to sign download URL", e)
            })?;

        tracing::debug!(object_key, bucket = %self.bucket, "Signed download URL");
        Ok(request.uri().to_string())
    }
}
