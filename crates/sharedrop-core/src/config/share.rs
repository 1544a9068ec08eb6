//! Share code and recall policy configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// Longest recall window accepted: one year.
pub const MAX_RECALL_WINDOW_SECONDS: u64 = 365 * 24 * 60 * 60;

/// Share code and recall policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// How long a share code resolves after creation, in seconds.
    #[serde(default = "default_window")]
    pub code_ttl_seconds: u64,
    /// How far back origin recall looks, in seconds.
    #[serde(default = "default_window")]
    pub recall_window_seconds: u64,
    /// Path to the newline-separated code vocabulary.
    #[serde(default = "default_word_list_path")]
    pub word_list_path: String,
    /// Attempts at registering a code that is not already in use.
    ///
    /// `1` keeps plain last-write-wins registration.
    #[serde(default = "default_code_attempts")]
    pub code_attempts: u32,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: default_window(),
            recall_window_seconds: default_window(),
            word_list_path: default_word_list_path(),
            code_attempts: default_code_attempts(),
        }
    }
}

impl ShareConfig {
    /// Code TTL as a `Duration`.
    pub fn code_ttl(&self) -> Duration {
        Duration::from_secs(self.code_ttl_seconds)
    }

    /// Recall window as a `Duration`.
    pub fn recall_window(&self) -> Duration {
        Duration::from_secs(self.recall_window_seconds)
    }

    /// Reject policies the backends cannot honour.
    ///
    /// Redis refuses `EX 0`, so a zero code TTL is never accepted.
    pub fn validate(&self) -> AppResult<()> {
        if self.code_ttl_seconds == 0 {
            return Err(AppError::configuration(
                "share.code_ttl_seconds must be at least 1",
            ));
        }
        if self.recall_window_seconds == 0 || self.recall_window_seconds > MAX_RECALL_WINDOW_SECONDS
        {
            return Err(AppError::configuration(format!(
                "share.recall_window_seconds must be between 1 and {MAX_RECALL_WINDOW_SECONDS}"
            )));
        }
        if self.code_attempts == 0 {
            return Err(AppError::configuration(
                "share.code_attempts must be at least 1",
            ));
        }
        Ok(())
    }
}

fn default_window() -> u64 {
    180
}

fn default_word_list_path() -> String {
    "assets/word_list.txt".to_string()
}

fn default_code_attempts() -> u32 {
    1
}
