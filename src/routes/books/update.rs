use actix_web::{put, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::database_service::DatabaseService;
use crate::types::document::{BookRes, RBookContent};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthUser;

/// Saves the HTML produced by the in-browser book editor.
#[put("/update/{movie_id}")]
async fn update(
    _auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<Uuid>,
    body: web::Json<RBookContent>,
) -> ApiResult<BookRes> {
    let content = body
        .into_inner()
        .content
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| AppError::Validation("content is required".into()))?;

    let book = db.update_book_content(path.into_inner(), content).await?;
    Ok(ApiResponse::Ok(BookRes {
        success: true,
        message: "Book updated".into(),
        book,
    }))
}
