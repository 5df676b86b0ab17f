use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;
use actix_multipart::form::MultipartFormConfig;
use actix_multipart::MultipartError;
use actix_web::error::PayloadError;
use actix_web::HttpRequest;
use uuid::Uuid;

use crate::types::error::AppError;

const MAX_FORM_BYTES: usize = 64 * 1024 * 1024;
const MAX_TEXT_BYTES: usize = 256 * 1024;

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Form-wide limits plus the mapping of extractor failures onto `AppError`.
/// Per-file limits live on each form's `#[multipart(limit = ..)]` attribute.
pub fn form_config() -> MultipartFormConfig {
    MultipartFormConfig::default()
        .total_limit(MAX_FORM_BYTES)
        .memory_limit(MAX_TEXT_BYTES)
        .error_handler(|err, _req: &HttpRequest| form_error(err).into())
}

fn form_error(err: MultipartError) -> AppError {
    match err {
        MultipartError::Payload(PayloadError::Overflow) => AppError::BadRequest("File too large".into()),
        MultipartError::MissingField(name) => AppError::Validation(format!("{name} is required")),
        MultipartError::Field { name, .. } => AppError::Validation(format!("{name} is not valid text")),
        other => AppError::BadRequest(format!("malformed multipart body: {other}")),
    }
}

/// Trimmed value of a text field; blank counts as absent.
pub fn text(field: Option<Text<String>>) -> Option<String> {
    field
        .map(|t| t.into_inner().trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn require(field: Option<Text<String>>, key: &str) -> Result<String, AppError> {
    text(field).ok_or_else(|| AppError::Validation(format!("{key} is required")))
}

pub fn uuid(field: Option<Text<String>>, key: &str) -> Result<Option<Uuid>, AppError> {
    text(field)
        .map(|v| Uuid::parse_str(&v).map_err(|_| AppError::Validation(format!("{key} is not a valid id"))))
        .transpose()
}

pub fn int(field: Option<Text<String>>, key: &str) -> Result<Option<i32>, AppError> {
    text(field)
        .map(|v| v.parse::<i32>().map_err(|_| AppError::Validation(format!("{key} must be a number"))))
        .transpose()
}

/// Loads an uploaded part into memory. A part sent without a filename (an
/// empty file input) counts as no upload.
pub async fn take_file(part: Option<TempFile>) -> Result<Option<UploadedFile>, AppError> {
    let Some(part) = part else {
        return Ok(None);
    };
    let filename = match part.file_name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => return Ok(None),
    };
    let bytes = tokio::fs::read(part.file.path())
        .await
        .map_err(|e| AppError::Storage(format!("failed to read upload: {e}")))?;
    Ok(Some(UploadedFile { filename, bytes }))
}
