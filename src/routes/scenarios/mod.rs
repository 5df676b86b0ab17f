use serde::Serialize;

use crate::storage::{ensure_extension, public_pdf_filename, Storage};
use crate::types::error::AppError;
use crate::utils::multipart::UploadedFile;

pub mod add;
pub mod delete;
pub mod get;
pub mod update;

const SCENARIO_EXTENSIONS: [&str; 3] = ["doc", "docx", "pdf"];

#[derive(Serialize)]
pub struct ScenarioRes {
    pub success: bool,
    pub message: String,
    pub scenario: entity::scenario::Model,
}

/// Stores the upload as PDF, converting office documents first.
async fn store_as_pdf(storage: &Storage, file: UploadedFile) -> Result<String, AppError> {
    let ext = ensure_extension(&file.filename, &SCENARIO_EXTENSIONS)?;
    let pdf = if ext == "pdf" {
        file.bytes
    } else {
        storage.converter.to_pdf(&file.bytes, &ext).await?
    };
    storage.blobs.put("scenarios", &public_pdf_filename(&file.filename), &pdf).await
}
