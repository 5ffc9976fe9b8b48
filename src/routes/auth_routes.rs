use axum::{
    extract::State,
    http::HeaderMap,
    routing::post,
    Json, Router,
};
use serde_json::json;

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::middleware::session::bearer_token;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthController::login(&state, request).await?;
    Ok(Json(response))
}

async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let token = bearer_token(&headers)
        .ok_or_else(|| AppError::Unauthorized("Missing session token".to_string()))?;
    AuthController::logout(&state, token).await?;
    Ok(Json(json!({
        "success": true,
        "message": "You have been logged out"
    })))
}
