use actix_multipart::form::MultipartForm;
use actix_web::{post, web};
use std::sync::Arc;
use tracing::{error, info};

use super::PICTURE_EXTENSIONS;
use crate::config::config;
use crate::db::database_service::DatabaseService;
use crate::storage::{ensure_extension, unique_filename, Storage};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserRegister, RegisterForm, RegisterRes};
use crate::utils::multipart;
use crate::utils::token::hash_password;

#[post("/register")]
async fn register(
    db: web::Data<Arc<DatabaseService>>,
    storage: web::Data<Storage>,
    MultipartForm(form): MultipartForm<RegisterForm>,
) -> ApiResult<RegisterRes> {
    let body = RUserRegister {
        email: multipart::require(form.email, "email")?.to_lowercase(),
        name: multipart::require(form.name, "name")?,
        last_name: multipart::require(form.last_name, "lastName")?,
        password: multipart::require(form.password, "password")?,
        role: multipart::int(form.role, "role")?,
        phone_number: multipart::text(form.phone_number),
    };

    if db.user_exists_by_email(&body.email).await? {
        return Err(AppError::AlreadyExists);
    }

    let (password_hash, password_salt) = hash_password(&body.password).map_err(|e| {
        error!("Failed to hash password: {}", e);
        AppError::Internal("failed to hash password".into())
    })?;

    let picture = match multipart::take_file(form.picture).await? {
        Some(file) => {
            ensure_extension(&file.filename, &PICTURE_EXTENSIONS)?;
            Some(storage.blobs.put("users", &unique_filename(&file.filename), &file.bytes).await?)
        }
        None => None,
    };

    let user = match db
        .create_user(DBUserCreate {
            email: body.email,
            name: body.name,
            last_name: body.last_name,
            password_hash,
            password_salt,
            picture: picture.clone(),
            phone_number: body.phone_number,
            role: body.role,
        })
        .await
    {
        Ok(user) => user,
        Err(e) => {
            storage.discard(picture.as_deref()).await;
            return Err(e);
        }
    };

    let token = db.create_session(user.id, config().session_ttl_hours).await?;
    info!("Registered user {}", user.id);

    Ok(ApiResponse::Created(RegisterRes { success: true, token, user }))
}
