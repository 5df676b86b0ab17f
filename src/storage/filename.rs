use chrono::Utc;
use std::path::Path;
use uuid::Uuid;

use crate::types::error::AppError;

/// `<millis>-<8 hex>`, enough to keep concurrent uploads apart.
pub fn unique_suffix() -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("{}-{}", Utc::now().timestamp_millis(), &random[..8])
}

/// Lowercased extension of `filename` without the dot.
fn extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Returns the extension when it is one of `allowed`.
pub fn ensure_extension(filename: &str, allowed: &[&str]) -> Result<String, AppError> {
    match extension(filename) {
        Some(ext) if allowed.contains(&ext.as_str()) => Ok(ext),
        _ => {
            let list = allowed.iter().map(|e| format!(".{e}")).collect::<Vec<_>>().join(", ");
            Err(AppError::BadRequest(format!("Only {list} files are allowed")))
        }
    }
}

/// `<stem with whitespace runs as _>-<unique>.pdf`.
pub fn public_pdf_filename(original: &str) -> String {
    let stem = Path::new(original)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    let base = stem.split_whitespace().collect::<Vec<_>>().join("_");
    let base = if base.is_empty() { "document".to_string() } else { base };
    format!("{}-{}.pdf", base, unique_suffix())
}

/// `<unique>.<ext>` for files whose original name is not kept.
pub fn unique_filename(original: &str) -> String {
    match extension(original) {
        Some(ext) => format!("{}.{}", unique_suffix(), ext),
        None => unique_suffix(),
    }
}
