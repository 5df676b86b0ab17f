use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Workflow category a note is filed under. `Scenario` is visible to every
/// crew role.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, DeriveActiveEnum,
    Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Category {
    #[sea_orm(string_value = "Scenario")]
    Scenario,
    #[sea_orm(string_value = "Rezija")]
    Rezija,
    #[sea_orm(string_value = "Gluma")]
    Gluma,
    #[sea_orm(string_value = "Snimanje")]
    Snimanje,
    #[sea_orm(string_value = "Montaza")]
    Montaza,
    #[sea_orm(string_value = "Scenografija")]
    Scenografija,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[sea_orm(string_value = "low")]
    Low,
    #[sea_orm(string_value = "medium")]
    Medium,
    #[sea_orm(string_value = "high")]
    High,
}

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "note")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub film_id: Uuid,
    pub created_by: Uuid,
    pub title: Option<String>,
    pub text: Option<String>, // the quoted excerpt as selected
    pub quote: Option<String>,
    pub description: Option<String>,
    pub page: Option<i32>,
    pub location: Option<i32>,
    pub category: Category,
    pub priority: Priority,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::movie::Entity",
        from = "Column::FilmId",
        to   = "super::movie::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Movie,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to   = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Creator,

    #[sea_orm(has_many = "super::note_assignee::Entity")]
    Assignee,

    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::movie::Entity> for Entity {
    fn to() -> RelationDef { Relation::Movie.def() }
}

impl Related<super::note_assignee::Entity> for Entity {
    fn to() -> RelationDef { Relation::Assignee.def() }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Comment.def() }
}

impl ActiveModelBehavior for ActiveModel {}
