use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum AuthSession {
    Table,
    Id,
    UserId,
    TokenHash,
    ExpiresAt,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(AuthSession::Table)
                .if_not_exists()
                .col(ColumnDef::new(AuthSession::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(AuthSession::UserId).uuid().not_null())
                .col(ColumnDef::new(AuthSession::TokenHash).string().not_null())
                .col(ColumnDef::new(AuthSession::ExpiresAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(AuthSession::CreatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_auth_session_user")
                        .from(AuthSession::Table, AuthSession::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_auth_session_user")
                .table(AuthSession::Table)
                .col(AuthSession::UserId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(AuthSession::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
