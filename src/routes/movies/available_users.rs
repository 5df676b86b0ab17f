use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::access::Role;
use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::movie::{AvailableUsersQuery, UsersRes};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthUser;

/// Users who could still be given `role` on the movie.
#[get("/{id}/available-users")]
async fn available_users(
    _auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<Uuid>,
    query: web::Query<AvailableUsersQuery>,
) -> ApiResult<UsersRes> {
    let movie_id = path.into_inner();
    let role = query.role.map(Role::try_from).transpose().map_err(AppError::Validation)?;
    db.ensure_movie_exists(movie_id).await?;

    let users = db.list_available_users(movie_id, role).await?;
    Ok(ApiResponse::Ok(UsersRes { success: true, users }))
}
