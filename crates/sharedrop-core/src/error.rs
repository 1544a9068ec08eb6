//! Unified application error types for ShareDrop.
//!
//! Every crate maps its backend errors (sqlx, redis, S3 presigning) into
//! [`AppError`] so that flows can propagate the first failure with `?`
//! and callers can branch on [`ErrorKind`] instead of matching strings.

use std::fmt;
use thiserror::Error;

/// Error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Missing share, unknown or expired code, or no recall match.
    NotFound,
    /// The durable share store failed.
    StoreUnavailable,
    /// The code cache failed.
    CacheUnavailable,
    /// A transfer URL could not be signed.
    SigningFailed,
    /// A cached code resolved to a share that does not exist.
    DataIntegrity,
    /// Caller input was rejected before reaching any backend.
    Validation,
    /// Invalid or missing configuration.
    Configuration,
    /// Anything else.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::StoreUnavailable => write!(f, "STORE_UNAVAILABLE"),
            Self::CacheUnavailable => write!(f, "CACHE_UNAVAILABLE"),
            Self::SigningFailed => write!(f, "SIGNING_FAILED"),
            Self::DataIntegrity => write!(f, "DATA_INTEGRITY"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout ShareDrop.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message. May contain backend details and
    /// must not be shown to end users verbatim; see [`AppError::public_message`].
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a share-store error.
    pub fn store(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::StoreUnavailable, message)
    }

    /// Create a code-cache error.
    pub fn cache(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CacheUnavailable, message)
    }

    /// Create a URL signing error.
    pub fn signing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SigningFailed, message)
    }

    /// Create a data-integrity error.
    pub fn data_integrity(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DataIntegrity, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Whether this is the expected "nothing there" outcome.
    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }

    /// Message safe to hand to an end user.
    ///
    /// Only not-found and validation messages are passed through; every
    /// other kind collapses to a generic text so backend details never leak.
    pub fn public_message(&self) -> String {
        match self.kind {
            ErrorKind::NotFound | ErrorKind::Validation => self.message.clone(),
            ErrorKind::DataIntegrity => "Share not found".to_string(),
            _ => "The request could not be completed".to_string(),
        }
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
