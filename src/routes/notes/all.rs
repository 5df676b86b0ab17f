use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::database_service::DatabaseService;
use crate::types::note::NotesRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthUser;

// Unfiltered. The client only offers this view to directors.
#[get("/all/{movie_id}")]
async fn all(
    _auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<Uuid>,
) -> ApiResult<NotesRes> {
    let records = db.list_notes_for_movie(path.into_inner()).await?;
    let notes = db.note_views(records).await?;
    Ok(ApiResponse::Ok(NotesRes { success: true, notes }))
}
