use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Shooting book attached to a movie. One per movie.
#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "book")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub movie_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub file_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub html_content: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::movie::Entity",
        from = "Column::MovieId",
        to   = "super::movie::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Movie,
}

impl Related<super::movie::Entity> for Entity {
    fn to() -> RelationDef { Relation::Movie.def() }
}

impl ActiveModelBehavior for ActiveModel {}
