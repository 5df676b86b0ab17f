use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::database_service::DatabaseService;
use crate::types::comment::CommentsRes;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthUser;

#[get("/{note_id}")]
async fn list(
    _auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<Uuid>,
) -> ApiResult<CommentsRes> {
    let note_id = path.into_inner();
    if !db.note_exists(note_id).await? {
        return Err(AppError::not_found("Note"));
    }

    let comments = db.list_comments_for_note(note_id).await?;
    Ok(ApiResponse::Ok(CommentsRes { success: true, comments }))
}
