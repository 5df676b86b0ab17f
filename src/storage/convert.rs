use async_trait::async_trait;
use std::path::PathBuf;
use tokio::{fs, process::Command};
use tracing::{error, info};

use crate::types::error::AppError;

/// Turns office documents into PDF.
#[async_trait]
pub trait DocumentConverter: Send + Sync {
    /// `extension` is the source format without the dot, e.g. `docx`.
    async fn to_pdf(&self, content: &[u8], extension: &str) -> Result<Vec<u8>, AppError>;
}

/// Shells out to a headless LibreOffice.
#[derive(Debug, Clone)]
pub struct SofficeConverter {
    bin: PathBuf,
}

impl SofficeConverter {
    pub fn new(bin: impl Into<PathBuf>) -> Self {
        Self { bin: bin.into() }
    }
}

fn conversion_error(e: impl std::fmt::Display) -> AppError {
    error!("Document conversion failed: {}", e);
    AppError::Conversion(e.to_string())
}

#[async_trait]
impl DocumentConverter for SofficeConverter {
    async fn to_pdf(&self, content: &[u8], extension: &str) -> Result<Vec<u8>, AppError> {
        let workdir = tempfile::tempdir().map_err(conversion_error)?;
        let input = workdir.path().join(format!("input.{}", extension.trim_start_matches('.')));
        fs::write(&input, content).await.map_err(conversion_error)?;

        let output = Command::new(&self.bin)
            .arg("--headless")
            .arg("--convert-to")
            .arg("pdf")
            .arg("--outdir")
            .arg(workdir.path())
            .arg(&input)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(conversion_error)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(conversion_error(format!("{} exited with {}: {}", self.bin.display(), output.status, stderr.trim())));
        }

        let pdf = fs::read(workdir.path().join("input.pdf")).await.map_err(conversion_error)?;
        info!("Converted {} bytes of .{} into {} bytes of PDF", content.len(), extension, pdf.len());
        Ok(pdf)
    }
}
