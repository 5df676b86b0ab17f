use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::database_service::DatabaseService;
use crate::types::movie::CreditsRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthUser;

#[get("/{id}/users")]
async fn users(
    _auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<Uuid>,
) -> ApiResult<CreditsRes> {
    let movie_id = path.into_inner();
    db.ensure_movie_exists(movie_id).await?;

    let users = db.list_credits(movie_id).await?;
    Ok(ApiResponse::Ok(CreditsRes { success: true, users }))
}
