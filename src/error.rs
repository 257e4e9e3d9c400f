use axum::{
    extract::rejection::JsonRejection,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::repositories::RepositoryError;
use crate::services::{
    AuthServiceError, EventServiceError, RsvpServiceError, TokenServiceError, UserServiceError,
};

// Type alias for Result with our AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// API-level error taxonomy. Every failure crossing the HTTP boundary is one
/// of these, rendered as `{"error": "<message>"}` with the mapped status.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    /// Duplicate email at signup. Mapped to 400, though semantically a
    /// conflict.
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthenticated(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Database(e) => AppError::Database(e),
            RepositoryError::NotFound => AppError::NotFound("Record not found".to_string()),
            RepositoryError::AlreadyExists => {
                AppError::Conflict("Record already exists".to_string())
            }
        }
    }
}

impl From<UserServiceError> for AppError {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::InvalidEmail
            | UserServiceError::WeakPassword
            | UserServiceError::InvalidRole(_) => AppError::Validation(err.to_string()),
            UserServiceError::EmailTaken => AppError::Conflict(err.to_string()),
            UserServiceError::HashingError(msg) => AppError::Internal(msg),
            UserServiceError::RepositoryError(e) => e.into(),
        }
    }
}

impl From<AuthServiceError> for AppError {
    fn from(err: AuthServiceError) -> Self {
        match err {
            AuthServiceError::InvalidCredentials => AppError::Unauthenticated(err.to_string()),
            AuthServiceError::RepositoryError(e) => e.into(),
        }
    }
}

impl From<TokenServiceError> for AppError {
    fn from(err: TokenServiceError) -> Self {
        match err {
            TokenServiceError::Signing(e) => AppError::Internal(e.to_string()),
            TokenServiceError::Invalid => {
                AppError::Unauthenticated("Invalid token".to_string())
            }
        }
    }
}

impl From<EventServiceError> for AppError {
    fn from(err: EventServiceError) -> Self {
        match err {
            EventServiceError::CreateForbidden
            | EventServiceError::ApproveForbidden
            | EventServiceError::DeleteForbidden => AppError::Forbidden(err.to_string()),
            EventServiceError::NotFound => AppError::NotFound(err.to_string()),
            EventServiceError::Validation(msg) => AppError::Validation(msg),
            EventServiceError::RepositoryError(e) => e.into(),
        }
    }
}

impl From<RsvpServiceError> for AppError {
    fn from(err: RsvpServiceError) -> Self {
        match err {
            RsvpServiceError::Forbidden => AppError::Forbidden(err.to_string()),
            RsvpServiceError::RepositoryError(e) => e.into(),
        }
    }
}

/// `axum::Json` wrapper whose rejection renders in the same
/// `{"error": ...}` shape as every other failure.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(AppError::Validation(rejection.body_text())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_taxonomy() {
        assert_eq!(
            AppError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Conflict("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unauthenticated("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Forbidden("x".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn forbidden_messages_pass_through() {
        let err: AppError = EventServiceError::ApproveForbidden.into();
        assert_eq!(err.to_string(), "Only admins can approve events");
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[test]
    fn email_taken_maps_to_conflict() {
        let err: AppError = UserServiceError::EmailTaken.into();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.to_string(), "Email already registered");
    }
}
