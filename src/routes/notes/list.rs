use actix_web::{get, web};
use std::sync::Arc;

use crate::access::visible_notes;
use crate::db::database_service::DatabaseService;
use crate::types::note::NotesRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthUser;

/// Everything the caller can see, across every movie they work on.
#[get("")]
async fn list(
    auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
) -> ApiResult<NotesRes> {
    let mut records = Vec::new();
    for movie_id in db.list_movie_ids_for_user(auth.id).await? {
        let roles = db.resolve_roles(auth.id, movie_id).await?;
        let notes = db.list_notes_for_movie(movie_id).await?;
        records.extend(visible_notes(auth.id, &roles, notes));
    }

    let notes = db.note_views(records).await?;
    Ok(ApiResponse::Ok(NotesRes { success: true, notes }))
}
