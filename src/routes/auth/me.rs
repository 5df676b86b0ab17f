use actix_web::{get, web};
use entity::user::Model as UserModel;
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthUser;

#[get("")]
async fn me(auth: AuthUser, db: web::Data<Arc<DatabaseService>>) -> ApiResult<UserModel> {
    Ok(ApiResponse::Ok(db.get_user_by_id(&auth.id).await?))
}
