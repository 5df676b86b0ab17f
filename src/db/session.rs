use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::utils::token::{construct_token, encrypt, extract_token_parts, new_id, new_token, verify};
use chrono::{Duration, Utc};
use entity::auth_session::{ActiveModel as SessionActive, Entity as Session};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use tracing::{error, warn};
use uuid::Uuid;

/// Who a valid bearer credential belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOwner {
    pub user_id: Uuid,
    pub session_id: Uuid,
}

impl DatabaseService {
    /// Opens a session for `user_id` and returns the bearer credential.
    pub async fn create_session(&self, user_id: Uuid, ttl_hours: i64) -> Result<String, AppError> {
        let session_id = new_id();
        let secret = new_token();
        let token_hash = encrypt(&secret).map_err(|e| {
            error!("Failed to hash session secret: {}", e);
            AppError::Internal("failed to issue credential".into())
        })?;
        let now = Utc::now();

        SessionActive {
            id: Set(session_id),
            user_id: Set(user_id),
            token_hash: Set(token_hash),
            expires_at: Set(now + Duration::hours(ttl_hours)),
            created_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?;

        Ok(construct_token(&session_id, &secret))
    }

    /// Email + password login. Unknown email and wrong password look the same.
    pub async fn login(&self, email: &str, password: &str, ttl_hours: i64) -> Result<String, AppError> {
        let user = match self.get_user_by_email(email).await {
            Ok(u) => u,
            Err(AppError::NotFound(_)) => return Err(AppError::Unauthorized),
            Err(e) => return Err(e),
        };

        if !verify(password, &user.password_hash).unwrap_or(false) {
            warn!("Failed login for user {}", user.id);
            return Err(AppError::Unauthorized);
        }

        self.create_session(user.id, ttl_hours).await
    }

    pub async fn authenticate(&self, token: &str) -> Result<SessionOwner, AppError> {
        let (session_id, secret) = extract_token_parts(token).ok_or(AppError::Unauthorized)?;

        let session = Session::find_by_id(session_id)
            .one(&self.database_connection)
            .await?
            .ok_or(AppError::Unauthorized)?;

        if session.expires_at <= Utc::now() {
            return Err(AppError::Unauthorized);
        }
        if !verify(&secret, &session.token_hash).unwrap_or(false) {
            return Err(AppError::Unauthorized);
        }

        Ok(SessionOwner { user_id: session.user_id, session_id: session.id })
    }

    pub async fn delete_session(&self, session_id: Uuid) -> Result<(), AppError> {
        Session::delete_by_id(session_id).exec(&self.database_connection).await?;
        Ok(())
    }

    /// Hard-delete every expired session.
    pub async fn expire_sessions(&self) -> Result<u64, AppError> {
        let res = Session::delete_many()
            .filter(entity::auth_session::Column::ExpiresAt.lte(Utc::now()))
            .exec(&self.database_connection)
            .await?;
        Ok(res.rows_affected)
    }
}
