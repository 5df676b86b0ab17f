use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One (movie, user, role) credit. Not unique on (movie_id, user_id): a user
/// holding several roles on a movie has one row per role.
#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "user_role_film")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub movie_id: Uuid,
    pub user_id: Uuid,
    pub role: i32,
    pub character: Option<String>,
    pub assigned_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to   = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::movie::Entity",
        from = "Column::MovieId",
        to   = "super::movie::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Movie,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<super::movie::Entity> for Entity {
    fn to() -> RelationDef { Relation::Movie.def() }
}

impl ActiveModelBehavior for ActiveModel {}
