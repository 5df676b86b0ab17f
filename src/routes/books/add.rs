use actix_multipart::form::MultipartForm;
use actix_web::{post, web};
use std::sync::Arc;

use super::BOOK_EXTENSIONS;
use crate::db::database_service::DatabaseService;
use crate::storage::{ensure_extension, unique_filename, Storage};
use crate::types::document::{BookForm, BookRes, DBBookUpsert};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::multipart;
use crate::utils::webutils::AuthUser;

/// Uploads the book file, replacing the previous one if the movie has a book.
#[post("/add")]
async fn add(
    _auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
    storage: web::Data<Storage>,
    MultipartForm(form): MultipartForm<BookForm>,
) -> ApiResult<BookRes> {
    let movie_id = multipart::uuid(form.movie_id, "movieId")?
        .ok_or_else(|| AppError::Validation("movieId is required".into()))?;
    let file = multipart::take_file(form.file)
        .await?
        .ok_or_else(|| AppError::Validation("file is required".into()))?;
    ensure_extension(&file.filename, &BOOK_EXTENSIONS)?;
    db.ensure_movie_exists(movie_id).await?;

    let file_url = storage.blobs.put("books", &unique_filename(&file.filename), &file.bytes).await?;
    let upsert = match db
        .upsert_book(DBBookUpsert {
            movie_id,
            file_url: file_url.clone(),
            title: multipart::text(form.title),
            description: multipart::text(form.description),
        })
        .await
    {
        Ok(upsert) => upsert,
        Err(e) => {
            storage.discard(Some(&file_url)).await;
            return Err(e);
        }
    };
    storage.discard(upsert.replaced.as_deref()).await;

    if upsert.created {
        Ok(ApiResponse::Created(BookRes {
            success: true,
            message: "Book uploaded".into(),
            book: upsert.book,
        }))
    } else {
        Ok(ApiResponse::Ok(BookRes {
            success: true,
            message: "Book replaced".into(),
            book: upsert.book,
        }))
    }
}
