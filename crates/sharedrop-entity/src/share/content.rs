//! Value objects returned by the share flows.

use serde::{Deserialize, Serialize};

use super::model::Share;

/// Outcome of creating a share.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareCreated {
    /// The persisted share.
    pub share: Share,
    /// The short code, or `None` if the share was stored but the code
    /// could not be registered. The share is still reachable by id and
    /// by origin recall in that case.
    pub code: Option<String>,
    /// Direct upload URL for file shares.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_url: Option<String>,
}

impl ShareCreated {
    /// Whether code registration failed after the share was stored.
    pub fn is_partial(&self) -> bool {
        self.code.is_none()
    }
}

/// What retrieving a share by id hands back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShareContent {
    /// The text payload of a text share.
    Text {
        /// Literal text.
        content: String,
    },
    /// A freshly signed download URL for a file share.
    File {
        /// Signed download URL.
        url: String,
    },
}
