use actix_web::{post, web};
use std::sync::Arc;
use tracing::{info, warn};

use crate::access::can_author;
use crate::config::config;
use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::note::{DBNoteCreate, NoteRes, RNoteCreate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthUser;

#[post("")]
async fn create(
    auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RNoteCreate>,
) -> ApiResult<NoteRes> {
    let body = body.into_inner();
    let film_id = body.film.ok_or_else(|| AppError::Validation("film is required".into()))?;
    db.ensure_movie_exists(film_id).await?;

    if config().enforce_note_categories {
        let roles = db.resolve_roles(auth.id, film_id).await?;
        if !can_author(&roles, body.category) {
            warn!("User {} tried to file a {:?} note on movie {}", auth.id, body.category, film_id);
            return Err(AppError::Forbidden(format!(
                "Your roles on this movie cannot file {:?} notes",
                body.category
            )));
        }
    }

    let record = db
        .create_note(DBNoteCreate {
            film_id,
            created_by: auth.id,
            title: body.title,
            text: body.text,
            quote: body.quote,
            description: body.description,
            page: body.page,
            location: body.location,
            category: body.category,
            priority: body.priority,
            assigned_to: body.assigned_to,
        })
        .await?;
    info!("User {} created note {} on movie {}", auth.id, record.note.id, film_id);

    let note = db.note_view(record).await?;
    Ok(ApiResponse::Created(NoteRes { success: true, note }))
}
