use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{movie_id}")]
async fn get(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<Uuid>,
) -> ApiResult<entity::book::Model> {
    Ok(ApiResponse::Ok(db.get_book(path.into_inner()).await?))
}
