use async_trait::async_trait;
use sea_orm::ConnectOptions;
use slate::config::{EnvConfig, StorageConfig, CONFIG};
use slate::db::database_service::DatabaseService;
use slate::storage::{DocumentConverter, LocalBlobStore, Storage};
use slate::types::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub mod client;

pub const FAKE_PDF_HEADER: &[u8] = b"%PDF-1.4 converted\n";

/// Stands in for LibreOffice: prefixes the input with a PDF header.
pub struct FakeConverter;

#[async_trait]
impl DocumentConverter for FakeConverter {
    async fn to_pdf(&self, content: &[u8], _extension: &str) -> Result<Vec<u8>, AppError> {
        let mut out = FAKE_PDF_HEADER.to_vec();
        out.extend_from_slice(content);
        Ok(out)
    }
}

/// Always fails, like a converter that cannot parse the document.
pub struct BrokenConverter;

#[async_trait]
impl DocumentConverter for BrokenConverter {
    async fn to_pdf(&self, _content: &[u8], _extension: &str) -> Result<Vec<u8>, AppError> {
        Err(AppError::Conversion("source file could not be loaded".into()))
    }
}

pub struct TestContext {
    pub db: Arc<DatabaseService>,
    pub storage: Storage,
    pub upload_dir: TempDir,
}

impl TestContext {
    pub async fn new() -> TestContext {
        Self::build(false, Arc::new(FakeConverter)).await
    }

    /// Same as `new`, but POST /notes checks the category against the
    /// creator's roles. Only use from a test binary where every test wants it.
    #[allow(dead_code)]
    pub async fn enforcing_categories() -> TestContext {
        Self::build(true, Arc::new(FakeConverter)).await
    }

    #[allow(dead_code)]
    pub async fn with_broken_converter() -> TestContext {
        Self::build(false, Arc::new(BrokenConverter)).await
    }

    async fn build(enforce: bool, converter: Arc<dyn DocumentConverter>) -> TestContext {
        let config = CONFIG.get_or_init(|| get_test_config(enforce));
        assert_eq!(config.enforce_note_categories, enforce, "test binary mixes config flavours");

        let options = ConnectOptions::new("sqlite::memory:")
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false)
            .to_owned();
        let db = Arc::new(
            DatabaseService::connect(options)
                .await
                .expect("Failed to initialize DatabaseService"),
        );

        let upload_dir = tempfile::tempdir().expect("Failed to create upload dir");
        let storage = Storage {
            blobs: Arc::new(LocalBlobStore::new(upload_dir.path(), "/uploads")),
            converter,
        };

        TestContext { db, storage, upload_dir }
    }

    /// Disk path behind a reference returned by the blob store.
    #[allow(dead_code)]
    pub fn stored_path(&self, reference: &str) -> PathBuf {
        self.upload_dir
            .path()
            .join(reference.trim_start_matches("/uploads/"))
    }
}

pub fn get_test_config(enforce_note_categories: bool) -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "sqlite::memory:".to_string(),
        storage: StorageConfig {
            upload_dir: PathBuf::from("unused"),
            public_prefix: "/uploads".to_string(),
            soffice_bin: "soffice".to_string(),
        },
        session_ttl_hours: 1,
        enforce_note_categories,
    }
}
