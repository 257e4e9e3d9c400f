//! Bearer-token authentication gate.
//!
//! Every protected route passes through [`require_auth`]: the Authorization
//! header is checked for the `Bearer ` prefix, the token is verified, and the
//! decoded principal is attached to request extensions for handlers to pick
//! up via `Extension<AuthUser>`. Stateless; nothing is stored per session.

use crate::error::AppError;
use crate::models::user::Role;
use crate::services::token_service::Claims;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

/// The authenticated identity for the duration of one request.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        AuthUser {
            id: claims.sub,
            email: claims.email,
            role: claims.role,
        }
    }
}

fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let auth_header = headers
        .get("authorization")
        .ok_or_else(|| AppError::Unauthenticated("Unauthorized".to_string()))?
        .to_str()
        .map_err(|_| AppError::Unauthenticated("Unauthorized".to_string()))?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthenticated("Unauthorized".to_string()))
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(request.headers())?.to_string();

    let claims = state
        .token_service
        .verify(&token)
        .map_err(|_| AppError::Unauthenticated("Invalid token".to_string()))?;

    request.extensions_mut().insert(AuthUser::from(claims));
    Ok(next.run(request).await)
}
