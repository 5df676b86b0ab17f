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
enum UserRoleFilm {
    Table,
    Id,
    MovieId,
    UserId,
    Role,
    Character,
    AssignedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // No unique constraint on (movie_id, user_id, role): one row per credit, duplicates allowed.
        m.create_table(
            Table::create()
                .table(UserRoleFilm::Table)
                .if_not_exists()
                .col(ColumnDef::new(UserRoleFilm::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(UserRoleFilm::MovieId).uuid().not_null())
                .col(ColumnDef::new(UserRoleFilm::UserId).uuid().not_null())
                .col(ColumnDef::new(UserRoleFilm::Role).integer().not_null())
                .col(ColumnDef::new(UserRoleFilm::Character).string().null())
                .col(ColumnDef::new(UserRoleFilm::AssignedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_user_role_film_movie")
                        .from(UserRoleFilm::Table, UserRoleFilm::MovieId)
                        .to(Movie::Table, Movie::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_user_role_film_user")
                        .from(UserRoleFilm::Table, UserRoleFilm::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        // role resolution
        m.create_index(
            Index::create()
                .name("idx_user_role_film_movie_user")
                .table(UserRoleFilm::Table)
                .col(UserRoleFilm::MovieId)
                .col(UserRoleFilm::UserId)
                .to_owned(),
        ).await?;

        // roster queries
        m.create_index(
            Index::create()
                .name("idx_user_role_film_movie_role")
                .table(UserRoleFilm::Table)
                .col(UserRoleFilm::MovieId)
                .col(UserRoleFilm::Role)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(UserRoleFilm::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
