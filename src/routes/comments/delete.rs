use actix_web::{delete, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult, Message};
use crate::utils::webutils::AuthUser;

#[delete("/{id}")]
async fn delete(
    auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<Uuid>,
) -> ApiResult<Message> {
    db.delete_comment(auth.id, path.into_inner()).await?;
    Ok(ApiResponse::Ok(Message::new("Comment deleted")))
}
