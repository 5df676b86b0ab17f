use actix_web::{delete, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::database_service::DatabaseService;
use crate::storage::Storage;
use crate::types::response::{ApiResponse, ApiResult, Message};
use crate::utils::webutils::AuthUser;

#[delete("/delete/{movie_id}")]
async fn delete(
    _auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
    storage: web::Data<Storage>,
    path: web::Path<Uuid>,
) -> ApiResult<Message> {
    let removed = db.delete_scenario(path.into_inner()).await?;
    storage.discard(removed.file_url.as_deref()).await;
    Ok(ApiResponse::Ok(Message::new("Scenario deleted")))
}
