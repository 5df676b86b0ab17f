use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Movie {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Note {
    Table,
    Id,
    FilmId,
    CreatedBy,
    Title,
    Text,
    Quote,
    Description,
    Page,
    Location,
    Category,
    Priority,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum NoteAssignee {
    Table,
    NoteId,
    UserId,
    Position,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Note::Table)
                .if_not_exists()
                .col(ColumnDef::new(Note::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Note::FilmId).uuid().not_null())
                .col(ColumnDef::new(Note::CreatedBy).uuid().not_null())
                .col(ColumnDef::new(Note::Title).string().null())
                .col(ColumnDef::new(Note::Text).text().null())
                .col(ColumnDef::new(Note::Quote).text().null())
                .col(ColumnDef::new(Note::Description).text().null())
                .col(ColumnDef::new(Note::Page).integer().null())
                .col(ColumnDef::new(Note::Location).integer().null())
                .col(ColumnDef::new(Note::Category).string_len(16).not_null())
                .col(ColumnDef::new(Note::Priority).string_len(8).not_null())
                .col(ColumnDef::new(Note::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Note::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_note_movie")
                        .from(Note::Table, Note::FilmId)
                        .to(Movie::Table, Movie::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_note_creator")
                        .from(Note::Table, Note::CreatedBy)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_note_film")
                .table(Note::Table)
                .col(Note::FilmId)
                .col(Note::CreatedAt)
                .to_owned(),
        ).await?;

        m.create_table(
            Table::create()
                .table(NoteAssignee::Table)
                .if_not_exists()
                .col(ColumnDef::new(NoteAssignee::NoteId).uuid().not_null())
                .col(ColumnDef::new(NoteAssignee::UserId).uuid().not_null())
                .col(ColumnDef::new(NoteAssignee::Position).integer().not_null())
                .primary_key(
                    Index::create()
                        .name("pk_note_assignee")
                        .col(NoteAssignee::NoteId)
                        .col(NoteAssignee::UserId)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_note_assignee_note")
                        .from(NoteAssignee::Table, NoteAssignee::NoteId)
                        .to(Note::Table, Note::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_note_assignee_user")
                        .from(NoteAssignee::Table, NoteAssignee::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_note_assignee_user")
                .table(NoteAssignee::Table)
                .col(NoteAssignee::UserId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(NoteAssignee::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(Note::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
