use actix_web::{post, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult, Message};
use crate::utils::webutils::AuthUser;

#[post("/logout")]
async fn logout(
    auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
) -> ApiResult<Message> {
    db.delete_session(auth.session_id).await?;
    Ok(ApiResponse::Ok(Message::new("Logged out")))
}
