use actix_multipart::form::MultipartForm;
use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

use crate::db::database_service::DatabaseService;
use crate::storage::{ensure_extension, unique_filename, Storage};
use crate::types::movie::{MovieCreateRes, MovieForm, RMovieCreate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::multipart;
use crate::utils::webutils::AuthUser;

#[post("/add")]
async fn add(
    auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
    storage: web::Data<Storage>,
    MultipartForm(form): MultipartForm<MovieForm>,
) -> ApiResult<MovieCreateRes> {
    let body = RMovieCreate {
        name: multipart::require(form.name, "name")?,
        description: multipart::text(form.description),
    };

    let picture = match multipart::take_file(form.picture).await? {
        Some(file) => {
            ensure_extension(&file.filename, &["jpg", "jpeg", "png", "gif", "webp"])?;
            Some(storage.blobs.put("movies", &unique_filename(&file.filename), &file.bytes).await?)
        }
        None => None,
    };

    let movie = match db.create_movie(auth.id, body, picture.clone()).await {
        Ok(movie) => movie,
        Err(e) => {
            storage.discard(picture.as_deref()).await;
            return Err(e);
        }
    };
    info!("User {} created movie {}", auth.id, movie.id);

    Ok(ApiResponse::Created(MovieCreateRes {
        success: true,
        message: format!("Movie {} has been successfully created.", movie.name),
        movie,
    }))
}
