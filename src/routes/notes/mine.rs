use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::access::visible_notes;
use crate::db::database_service::DatabaseService;
use crate::types::note::NotesRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthUser;

/// Notes on one movie the caller is allowed to see.
#[get("/mine/{movie_id}")]
async fn mine(
    auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<Uuid>,
) -> ApiResult<NotesRes> {
    let movie_id = path.into_inner();
    let roles = db.resolve_roles(auth.id, movie_id).await?;
    let records = if roles.is_empty() {
        Vec::new()
    } else {
        visible_notes(auth.id, &roles, db.list_notes_for_movie(movie_id).await?)
    };

    let notes = db.note_views(records).await?;
    Ok(ApiResponse::Ok(NotesRes { success: true, notes }))
}
