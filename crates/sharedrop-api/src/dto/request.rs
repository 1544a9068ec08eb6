//! Request DTOs.

use serde::{Deserialize, Serialize};

use sharedrop_core::error::AppError;
use sharedrop_entity::share::ShareContentType;
use sharedrop_service::CreateShareRequest;

/// Create-share request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShareBody {
    /// `"TEXT"` or `"FILE"`.
    pub content_type: String,
    /// Text payload, required for `TEXT`.
    #[serde(default)]
    pub content: Option<String>,
    /// Client-side file name, required for `FILE`.
    #[serde(default)]
    pub file_name: Option<String>,
}

impl TryFrom<CreateShareBody> for CreateShareRequest {
    type Error = AppError;

    fn try_from(body: CreateShareBody) -> Result<Self, Self::Error> {
        match body.content_type.parse::<ShareContentType>()? {
            ShareContentType::Text => {
                let content = body
                    .content
                    .filter(|c| !c.is_empty())
                    .ok_or_else(|| AppError::validation("content is required for TEXT shares"))?;
                Ok(Self::Text { content })
            }
            ShareContentType::File => {
                let file_name = body
                    .file_name
                    .filter(|f| !f.trim().is_empty())
                    .ok_or_else(|| AppError::validation("fileName is required for FILE shares"))?;
                Ok(Self::File { file_name })
            }
        }
    }
}

/// Query string of a code lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeQuery {
    /// The share code.
    #[serde(default)]
    pub code: Option<String>,
}
