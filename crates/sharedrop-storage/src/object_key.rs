//! Object key naming policy.
//!
//! Keys follow `{base}-{uuid}.{extension}`, so two uploads of
//! `report.pdf` never collide and both keep their `.pdf` extension.

use uuid::Uuid;

use sharedrop_core::error::AppError;
use sharedrop_core::result::AppResult;

/// Derive a collision-resistant object key from a client-supplied file name.
///
/// Only the final path component of `file_name` is used. The extension is
/// whatever follows the last `.`; names without one (or ending in `.`) get
/// no extension segment. A leading dot marks a hidden file rather than an
/// extension, so `.env` keeps its whole name as the base.
pub fn object_key_for(file_name: &str) -> AppResult<String> {
    with_suffix(file_name, &Uuid::new_v4().to_string())
}

fn with_suffix(file_name: &str, suffix: &str) -> AppResult<String> {
    let name = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() {
        return Err(AppError::validation("File name must not be empty"));
    }
    if name.chars().all(|c| c == '.') {
        return Err(AppError::validation(format!("'{name}' is not a file name")));
    }

    let key = match name.rsplit_once('.') {
        Some((base, ext)) if !base.is_empty() && !ext.is_empty() => {
            format!("{base}-{suffix}.{ext}")
        }
        Some((base, "")) => format!("{base}-{suffix}"),
        _ => format!("{name}-{suffix}"),
    };

    Ok(key)
}
