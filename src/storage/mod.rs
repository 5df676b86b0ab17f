mod blob;
mod convert;
mod filename;

pub use blob::{BlobStore, LocalBlobStore};
pub use convert::{DocumentConverter, SofficeConverter};
pub use filename::{ensure_extension, public_pdf_filename, unique_filename};

/// Collaborators used by the upload routes, shared as app data.
#[derive(Clone)]
pub struct Storage {
    pub blobs: std::sync::Arc<dyn BlobStore>,
    pub converter: std::sync::Arc<dyn DocumentConverter>,
}

impl Storage {
    pub fn new(blobs: impl BlobStore + 'static, converter: impl DocumentConverter + 'static) -> Self {
        Self {
            blobs: std::sync::Arc::new(blobs),
            converter: std::sync::Arc::new(converter),
        }
    }

    /// Best-effort removal of a file that is no longer referenced.
    pub async fn discard(&self, reference: Option<&str>) {
        let Some(reference) = reference else { return };
        if let Err(e) = self.blobs.remove(reference).await {
            tracing::warn!("Could not remove {}: {}", reference, e);
        }
    }
}
