//! Share content type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a share's `content` column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "share_content_type", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ShareContentType {
    /// The literal text payload.
    Text,
    /// An opaque object-storage key; the bytes live in the bucket.
    File,
}

impl ShareContentType {
    /// Return the content type as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::File => "FILE",
        }
    }
}

impl fmt::Display for ShareContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShareContentType {
    type Err = sharedrop_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TEXT" => Ok(Self::Text),
            "FILE" => Ok(Self::File),
            _ => Err(sharedrop_core::AppError::validation(format!(
                "Invalid content type: '{s}'. Expected one of: TEXT, FILE"
            ))),
        }
    }
}
