//! Share entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::content_type::ShareContentType;

/// One deposited piece of content.
///
/// Shares are create/read/delete only. Nothing about a share changes
/// after it is written; only its code shortcut in the cache expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Share {
    /// Unique share identifier, assigned by the store.
    pub id: Uuid,
    /// Network address of the creator. Not unique.
    pub origin_address: String,
    /// Whether `content` is text or an object key.
    pub content_type: ShareContentType,
    /// Literal text for `TEXT`, the storage object key for `FILE`.
    pub content: String,
    /// When the share was created, assigned by the store.
    pub created_at: DateTime<Utc>,
}

impl Share {
    /// Whether this share points at an object in storage.
    pub fn is_file(&self) -> bool {
        self.content_type == ShareContentType::File
    }
}

/// Data required to create a new share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateShare {
    /// Network address of the creator.
    pub origin_address: String,
    /// Content type.
    pub content_type: ShareContentType,
    /// Text payload or object key. Never empty.
    pub content: String,
}

impl CreateShare {
    /// A text share.
    pub fn text(origin_address: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            origin_address: origin_address.into(),
            content_type: ShareContentType::Text,
            content: content.into(),
        }
    }

    /// A file share referencing `object_key`.
    pub fn file(origin_address: impl Into<String>, object_key: impl Into<String>) -> Self {
        Self {
            origin_address: origin_address.into(),
            content_type: ShareContentType::File,
            content: object_key.into(),
        }
    }
}
