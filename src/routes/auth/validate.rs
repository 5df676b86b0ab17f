use actix_web::{post, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthUser;

/// Reaching the handler means the bearer middleware accepted the credential.
#[post("/validate")]
async fn validate(_auth: AuthUser) -> ApiResult<bool> {
    Ok(ApiResponse::Ok(true))
}

/// Checks the coarse account-level hint, not any per-movie role.
#[post("/validate/director")]
async fn validate_director(
    auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
) -> ApiResult<bool> {
    let user = db.get_user_by_id(&auth.id).await?;
    if user.role != Some(1) {
        return Err(AppError::Forbidden("Director account required".into()));
    }
    Ok(ApiResponse::Ok(true))
}
