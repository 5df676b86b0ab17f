use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

use crate::db::book::book_exists;
use crate::db::database_service::DatabaseService;
use crate::storage::Storage;
use crate::types::document::{BookRes, DBBookUpsert, RCreateEmptyBook};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::token::new_id;
use crate::utils::webutils::AuthUser;

const PLACEHOLDER_TEXT: &str = "This shooting book is empty and was created automatically.\n";

/// Starts a movie's shooting book from a one-page placeholder PDF. Refuses
/// movies that already have a book.
#[post("/create-empty")]
async fn create_empty(
    auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
    storage: web::Data<Storage>,
    body: web::Json<RCreateEmptyBook>,
) -> ApiResult<BookRes> {
    let movie_id = body.movie_id.ok_or_else(|| AppError::Validation("movieId is required".into()))?;
    db.ensure_movie_exists(movie_id).await?;
    if db.find_book(movie_id).await?.is_some() {
        return Err(book_exists());
    }

    let pdf = storage.converter.to_pdf(PLACEHOLDER_TEXT.as_bytes(), "txt").await?;
    let file_url = storage.blobs.put("books", &format!("book-{}.pdf", new_id()), &pdf).await?;

    let book = match db
        .create_book(DBBookUpsert {
            movie_id,
            file_url: file_url.clone(),
            title: Some("Shooting book".into()),
            description: Some("Empty book created automatically.".into()),
        })
        .await
    {
        Ok(book) => book,
        Err(e) => {
            storage.discard(Some(&file_url)).await;
            return Err(e);
        }
    };
    info!("User {} created an empty book for movie {}", auth.id, movie_id);

    Ok(ApiResponse::Created(BookRes {
        success: true,
        message: "Empty book created".into(),
        book,
    }))
}
