use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Movie {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Scenario {
    Table,
    Id,
    MovieId,
    Title,
    Description,
    FileUrl,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Book {
    Table,
    Id,
    MovieId,
    Title,
    Description,
    FileUrl,
    HtmlContent,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Scenario::Table)
                .if_not_exists()
                .col(ColumnDef::new(Scenario::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Scenario::MovieId).uuid().not_null().unique_key())
                .col(ColumnDef::new(Scenario::Title).string().not_null())
                .col(ColumnDef::new(Scenario::Description).text().null())
                .col(ColumnDef::new(Scenario::FileUrl).string().null())
                .col(ColumnDef::new(Scenario::CreatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_scenario_movie")
                        .from(Scenario::Table, Scenario::MovieId)
                        .to(Movie::Table, Movie::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_table(
            Table::create()
                .table(Book::Table)
                .if_not_exists()
                .col(ColumnDef::new(Book::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Book::MovieId).uuid().not_null().unique_key())
                .col(ColumnDef::new(Book::Title).string().not_null())
                .col(ColumnDef::new(Book::Description).text().null())
                .col(ColumnDef::new(Book::FileUrl).string().null())
                .col(ColumnDef::new(Book::HtmlContent).text().null())
                .col(ColumnDef::new(Book::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Book::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_book_movie")
                        .from(Book::Table, Book::MovieId)
                        .to(Movie::Table, Movie::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Book::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(Scenario::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
