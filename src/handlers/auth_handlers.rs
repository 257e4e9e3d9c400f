use crate::error::{AppJson, Result};
use crate::services::auth_service::LoginRequest;
use crate::services::user_service::SignupRequest;
use crate::AppState;
use axum::{extract::State, response::Json};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Deserialize)]
pub struct SignupBody {
    pub email: String,
    pub password: String,
    pub role: Option<String>,
}

pub async fn signup(
    State(state): State<AppState>,
    AppJson(body): AppJson<SignupBody>,
) -> Result<Json<Value>> {
    let user = state
        .user_service
        .signup(SignupRequest {
            email: body.email,
            password: body.password,
            role: body.role,
        })
        .await?;

    tracing::info!(user_id = user.id, "account created");

    Ok(Json(json!({
        "message": "Account created successfully",
        "userId": user.id,
    })))
}

#[derive(Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    AppJson(body): AppJson<LoginBody>,
) -> Result<Json<Value>> {
    let user = state
        .auth_service
        .authenticate(LoginRequest {
            email: body.email,
            password: body.password,
        })
        .await?;

    let token = state.token_service.issue(&user)?;

    Ok(Json(json!({
        "token": token,
        "role": user.role,
        "email": user.email,
    })))
}
