use std::future::{ready, Ready};
use std::sync::Arc;

use actix_web::{dev::Payload, dev::ServiceRequest, web, FromRequest, HttpMessage, HttpRequest};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use tracing::error;
use uuid::Uuid;

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;

/// The caller behind a validated bearer credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub id: Uuid,
    pub session_id: Uuid,
}

impl FromRequest for AuthUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(req.extensions().get::<AuthUser>().copied().ok_or(AppError::Unauthorized))
    }
}

pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let Some(db) = req.app_data::<web::Data<Arc<DatabaseService>>>().cloned() else {
        error!("DatabaseService missing from app data");
        return Err((AppError::Internal("database unavailable".into()).into(), req));
    };

    match db.authenticate(credentials.token()).await {
        Ok(owner) => {
            req.extensions_mut().insert(AuthUser { id: owner.user_id, session_id: owner.session_id });
            Ok(req)
        }
        Err(e) => Err((e.into(), req)),
    }
}
