use actix_web::{get, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::movie::UsersRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserSummary;
use crate::utils::webutils::AuthUser;

#[get("/all")]
async fn all(auth: AuthUser, db: web::Data<Arc<DatabaseService>>) -> ApiResult<UsersRes> {
    let users = db
        .list_other_users(auth.id)
        .await?
        .into_iter()
        .map(UserSummary::from)
        .collect();

    Ok(ApiResponse::Ok(UsersRes { success: true, users }))
}
