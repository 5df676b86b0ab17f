use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::user::UserSummary;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RCommentCreate {
    pub note_id: Option<Uuid>,
    pub text: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: Uuid,
    pub note_id: Uuid,
    pub user: Option<UserSummary>,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Debug)]
pub struct CommentsRes {
    pub success: bool,
    pub comments: Vec<CommentView>,
}

#[derive(Serialize, Debug)]
pub struct CommentRes {
    pub success: bool,
    pub comment: CommentView,
}
