//! Transfer URL issuer implementations.

#[cfg(feature = "s3")]
pub mod s3;

#[cfg(feature = "s3")]
pub use s3::S3TransferIssuer;
