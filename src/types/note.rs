use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use entity::note::{Category, Model as NoteModel, Priority};

use crate::access::VisibleNote;
use crate::types::user::UserSummary;

/// Accepts `null`, a single id, or a list of ids.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum OneOrMany {
    One(Uuid),
    Many(Vec<Uuid>),
}

fn assignees<'de, D>(deserializer: D) -> Result<Vec<Uuid>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<OneOrMany> = Option::deserialize(deserializer)?;
    Ok(normalize_assignees(raw))
}

/// Flattens the accepted shapes into a duplicate-free list, first occurrence wins.
pub fn normalize_assignees(raw: Option<OneOrMany>) -> Vec<Uuid> {
    let ids = match raw {
        None => Vec::new(),
        Some(OneOrMany::One(id)) => vec![id],
        Some(OneOrMany::Many(ids)) => ids,
    };
    let mut out: Vec<Uuid> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RNoteCreate {
    pub film: Option<Uuid>,
    pub title: Option<String>,
    pub text: Option<String>,
    pub quote: Option<String>,
    pub description: Option<String>,
    pub page: Option<i32>,
    pub location: Option<i32>,
    pub category: Category,
    pub priority: Priority,
    #[serde(default, deserialize_with = "assignees")]
    pub assigned_to: Vec<Uuid>,
}

#[derive(Debug, Clone)]
pub struct DBNoteCreate {
    pub film_id: Uuid,
    pub created_by: Uuid,
    pub title: Option<String>,
    pub text: Option<String>,
    pub quote: Option<String>,
    pub description: Option<String>,
    pub page: Option<i32>,
    pub location: Option<i32>,
    pub category: Category,
    pub priority: Priority,
    pub assigned_to: Vec<Uuid>,
}

/// A note row plus its assignees, in assignment order.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteRecord {
    pub note: NoteModel,
    pub assigned_to: Vec<Uuid>,
}

impl VisibleNote for NoteRecord {
    fn category(&self) -> Category {
        self.note.category
    }

    fn created_by(&self) -> Uuid {
        self.note.created_by
    }

    fn assigned_to(&self) -> &[Uuid] {
        &self.assigned_to
    }
}

/// Note as returned to clients, with creator and assignees populated.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NoteView {
    pub id: Uuid,
    pub film: Uuid,
    pub title: Option<String>,
    pub text: Option<String>,
    pub quote: Option<String>,
    pub description: Option<String>,
    pub page: Option<i32>,
    pub location: Option<i32>,
    pub category: Category,
    pub priority: Priority,
    pub created_by: Option<UserSummary>,
    pub assigned_to: Vec<UserSummary>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Debug)]
pub struct NotesRes {
    pub success: bool,
    pub notes: Vec<NoteView>,
}

#[derive(Serialize, Debug)]
pub struct NoteRes {
    pub success: bool,
    pub note: NoteView,
}
