pub use sea_orm_migration::prelude::*;

mod m20251001_000001_create_user_table;
mod m20251001_000002_create_auth_session_table;
mod m20251001_000003_create_movie_table;
mod m20251001_000004_create_user_role_film_table;
mod m20251001_000005_create_note_tables;
mod m20251001_000006_create_comment_table;
mod m20251001_000007_create_document_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_user_table::Migration),
            Box::new(m20251001_000002_create_auth_session_table::Migration),
            Box::new(m20251001_000003_create_movie_table::Migration),
            Box::new(m20251001_000004_create_user_role_film_table::Migration),
            Box::new(m20251001_000005_create_note_tables::Migration),
            Box::new(m20251001_000006_create_comment_table::Migration),
            Box::new(m20251001_000007_create_document_tables::Migration),
        ]
    }
}
