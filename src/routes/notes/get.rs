use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::database_service::DatabaseService;
use crate::types::note::NoteRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthUser;

#[get("/{id}")]
async fn get(
    _auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<Uuid>,
) -> ApiResult<NoteRes> {
    let record = db.get_note(path.into_inner()).await?;
    let note = db.note_view(record).await?;
    Ok(ApiResponse::Ok(NoteRes { success: true, note }))
}
