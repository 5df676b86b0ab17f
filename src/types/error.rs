use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use sea_orm::{DbErr, SqlErr};

#[derive(Debug, Error)]
pub enum AppError {
    // standard web stuffs
    #[error("already exists")]
    AlreadyExists,
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("{0}")]
    Forbidden(String),

    // collaborators
    #[error("storage failure: {0}")]
    Storage(String),
    #[error("failed to convert file to PDF: {0}")]
    Conversion(String),

    // infra things
    #[error(transparent)]
    Db(sea_orm::DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl AppError {
    pub fn not_found(what: &str) -> Self {
        AppError::NotFound(format!("{what} not found"))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Conversion(_) => "CONVERSION_ERROR",
            Self::Db(_) => "DB_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Replaces a unique-key clash with a more specific error.
    pub fn on_duplicate(self, replacement: impl FnOnce() -> AppError) -> AppError {
        match self {
            AppError::AlreadyExists => replacement(),
            other => other,
        }
    }

    fn from_db(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
            return AppError::AlreadyExists;
        }
        match err {
            DbErr::RecordNotFound(what) => AppError::NotFound(what),
            _ => AppError::Db(err),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Storage(_) | Self::Conversion(_) | Self::Db(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(ErrorBody { error: self.kind(), message: self.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_found_maps_to_404() {
        let err: AppError = DbErr::RecordNotFound("Movie not found".into()).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Movie not found");
    }

    #[test]
    fn permission_denied_is_distinct_from_not_found() {
        let denied = AppError::Forbidden("Director cannot be removed".into());
        assert_eq!(denied.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(denied.kind(), "FORBIDDEN");
        assert_ne!(denied.status_code(), AppError::not_found("Comment").status_code());
    }

    #[test]
    fn collaborator_failures_keep_their_message() {
        let err = AppError::Conversion("soffice exited with status 1".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("soffice exited with status 1"));
    }
}
