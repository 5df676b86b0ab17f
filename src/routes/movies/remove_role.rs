use actix_web::{post, web};
use std::sync::Arc;
use uuid::Uuid;

use super::parse_role;
use crate::access::Role;
use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::movie::{RRemoveRole, RemoveRoleRes};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthUser;

/// Drops every (movie, user, role) row at once and returns the new roster.
#[post("/{id}/remove-role")]
async fn remove_role(
    _auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<Uuid>,
    body: web::Json<RRemoveRole>,
) -> ApiResult<RemoveRoleRes> {
    let movie_id = path.into_inner();
    if body.role == Some(Role::Director.number()) {
        return Err(AppError::Forbidden("Director cannot be removed".into()));
    }
    let role = parse_role(body.role)?;
    let user_id = body.user_id.ok_or_else(|| AppError::Validation("userId is required".into()))?;

    let removed_count = db.remove_role(movie_id, user_id, role).await?;
    let users = db.list_credits(movie_id).await?;

    Ok(ApiResponse::Ok(RemoveRoleRes {
        success: true,
        message: format!("Removed {role} from user"),
        removed_count,
        users,
    }))
}
