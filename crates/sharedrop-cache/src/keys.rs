//! Cache key builders for all ShareDrop cache entries.

/// Namespace applied to share-related keys.
const PREFIX: &str = "share";

/// Cache key mapping a share code to a share id.
pub fn share_code(code: &str) -> String {
    format!("{PREFIX}:code:{code}")
}
