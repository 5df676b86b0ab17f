use actix_web::{post, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::comment::{CommentRes, RCommentCreate};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthUser;

#[post("")]
async fn create(
    auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RCommentCreate>,
) -> ApiResult<CommentRes> {
    let body = body.into_inner();
    let note_id = body.note_id.ok_or_else(|| AppError::Validation("noteId is required".into()))?;
    let text = body
        .text
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Validation("text is required".into()))?;

    let comment = db.create_comment(note_id, auth.id, text).await?;
    Ok(ApiResponse::Created(CommentRes { success: true, comment }))
}
