use actix_web::{post, web};
use std::sync::Arc;

use crate::config::config;
use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{LoginRes, RLogin};

#[post("/login")]
async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RLogin>,
) -> ApiResult<LoginRes> {
    let email = body.email.trim().to_lowercase();
    let token = db.login(&email, &body.password, config().session_ttl_hours).await?;

    Ok(ApiResponse::Ok(LoginRes { token }))
}
