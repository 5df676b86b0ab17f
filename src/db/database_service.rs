use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

#[derive(Clone)]
pub struct DatabaseService {
    pub(crate) database_connection: DatabaseConnection,
}

impl DatabaseService {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        Self::connect(ConnectOptions::new(uri.to_owned())).await
    }

    /// Connects and brings the schema up to date.
    pub async fn connect(options: ConnectOptions) -> Result<Self, DbErr> {
        info!("Connecting to database...");
        let db = Database::connect(options).await?;
        info!("Running migrations...");
        Migrator::up(&db, None).await?;
        info!("Migrations finished.");
        Ok(Self { database_connection: db })
    }
}
