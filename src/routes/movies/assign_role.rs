use actix_web::{post, web};
use std::sync::Arc;
use uuid::Uuid;

use super::parse_role;
use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::movie::{AssignRoleRes, RAssignRole};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthUser;

#[post("/{id}/assign-role")]
async fn assign_role(
    _auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<Uuid>,
    body: web::Json<RAssignRole>,
) -> ApiResult<AssignRoleRes> {
    let movie_id = path.into_inner();
    let body = body.into_inner();
    let user_id = body.user_id.ok_or_else(|| AppError::Validation("userId is required".into()))?;
    let role = parse_role(body.role)?;

    let user_role = db.assign_role(movie_id, user_id, role, body.character).await?;

    Ok(ApiResponse::Created(AssignRoleRes {
        success: true,
        message: format!("Role {role} assigned"),
        user_role,
    }))
}
