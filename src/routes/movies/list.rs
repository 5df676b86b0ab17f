use actix_web::{get, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::movie::{CrewMovie, DirectedMovie, MovieListRes};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthUser;

#[get("/my-movies")]
async fn my_movies(
    auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
) -> ApiResult<MovieListRes<DirectedMovie>> {
    let movies = db.list_directed_movies(auth.id).await?;
    Ok(ApiResponse::Ok(MovieListRes { success: true, movies }))
}

#[get("/not-my-movies")]
async fn not_my_movies(
    auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
) -> ApiResult<MovieListRes<CrewMovie>> {
    let movies = db.list_crew_movies(auth.id).await?;
    Ok(ApiResponse::Ok(MovieListRes { success: true, movies }))
}
