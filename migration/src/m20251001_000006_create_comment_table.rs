use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Note {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Comment {
    Table,
    Id,
    NoteId,
    UserId,
    Text,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Comment::Table)
                .if_not_exists()
                .col(ColumnDef::new(Comment::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Comment::NoteId).uuid().not_null())
                .col(ColumnDef::new(Comment::UserId).uuid().not_null())
                .col(ColumnDef::new(Comment::Text).text().not_null())
                .col(ColumnDef::new(Comment::CreatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_comment_note")
                        .from(Comment::Table, Comment::NoteId)
                        .to(Note::Table, Note::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_comment_user")
                        .from(Comment::Table, Comment::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_comment_note")
                .table(Comment::Table)
                .col(Comment::NoteId)
                .col(Comment::CreatedAt)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Comment::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
