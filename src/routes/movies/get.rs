use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::database_service::DatabaseService;
use crate::types::movie::MovieRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthUser;

#[get("/{id}")]
async fn get(
    _auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<Uuid>,
) -> ApiResult<MovieRes> {
    let movie = db.get_movie(path.into_inner()).await?;
    Ok(ApiResponse::Ok(MovieRes { success: true, movie }))
}
