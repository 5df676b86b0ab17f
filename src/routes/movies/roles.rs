use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::database_service::DatabaseService;
use crate::types::movie::{MyRoleRes, RolesRes};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthUser;

/// The caller's main role on the movie, `null` when they have none.
#[get("/{id}/my-role")]
async fn my_role(
    auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<Uuid>,
) -> ApiResult<MyRoleRes> {
    let roles = db.resolve_roles(auth.id, path.into_inner()).await?;
    let main = roles.main_grant();

    Ok(ApiResponse::Ok(MyRoleRes {
        success: true,
        role: main.map(|g| g.role),
        character: main.and_then(|g| g.character.clone()),
    }))
}

#[get("/{id}/my-roles")]
async fn my_roles(
    auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<Uuid>,
) -> ApiResult<RolesRes> {
    let roles = db.resolve_roles(auth.id, path.into_inner()).await?;

    Ok(ApiResponse::Ok(RolesRes {
        success: true,
        main_role: roles.main_role_number(),
        roles: roles.grants().to_vec(),
    }))
}

#[get("/{id}/user/{user_id}/roles")]
async fn user_roles(
    _auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<(Uuid, Uuid)>,
) -> ApiResult<RolesRes> {
    let (movie_id, user_id) = path.into_inner();
    let roles = db.resolve_roles(user_id, movie_id).await?;

    Ok(ApiResponse::Ok(RolesRes {
        success: true,
        main_role: roles.main_role_number(),
        roles: roles.grants().to_vec(),
    }))
}
