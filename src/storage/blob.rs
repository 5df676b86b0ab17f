use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::{error, warn};

use crate::types::error::AppError;

/// Where uploaded files live. The rest of the service only ever sees the
/// reference string `put` returns.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Stores `content` as `folder/filename` and returns its public reference.
    async fn put(&self, folder: &str, filename: &str, content: &[u8]) -> Result<String, AppError>;

    /// Removes the file behind `reference`. Unknown references are ignored.
    async fn remove(&self, reference: &str) -> Result<(), AppError>;
}

/// Files on local disk, served by whatever fronts the service under
/// `public_prefix`.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
    public_prefix: String,
}

impl LocalBlobStore {
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.into().trim_end_matches('/').to_string(),
        }
    }

    /// Maps a reference back onto disk. `None` for anything outside the root.
    fn path_of(&self, reference: &str) -> Option<PathBuf> {
        let relative = reference.strip_prefix(&self.public_prefix)?.trim_start_matches('/');
        let relative = Path::new(relative);
        if relative.components().any(|c| !matches!(c, Component::Normal(_))) {
            return None;
        }
        Some(self.root.join(relative))
    }
}

fn safe_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.contains(['/', '\\']) && segment != "." && segment != ".."
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn put(&self, folder: &str, filename: &str, content: &[u8]) -> Result<String, AppError> {
        if !safe_segment(folder) || !safe_segment(filename) {
            return Err(AppError::Storage(format!("invalid file name {folder}/{filename}")));
        }
        let dir = self.root.join(folder);
        fs::create_dir_all(&dir).await.map_err(|e| {
            error!("Failed to create upload dir {}: {}", dir.display(), e);
            AppError::Storage(e.to_string())
        })?;
        let path = dir.join(filename);
        fs::write(&path, content).await.map_err(|e| {
            error!("Failed to write {}: {}", path.display(), e);
            AppError::Storage(e.to_string())
        })?;

        Ok(format!("{}/{}/{}", self.public_prefix, folder, filename))
    }

    async fn remove(&self, reference: &str) -> Result<(), AppError> {
        let Some(path) = self.path_of(reference) else {
            warn!("Refusing to remove {} outside the upload root", reference);
            return Ok(());
        };
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(e.to_string())),
        }
    }
}
