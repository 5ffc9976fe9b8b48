//! Login and logout orchestration.

use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::services::auth_service::AuthService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct AuthController;

impl AuthController {
    pub async fn login(state: &AppState, request: LoginRequest) -> Result<LoginResponse, AppError> {
        request.validate()?;

        let auth_service = AuthService::new(state.pool.clone());
        let (session, _user) = auth_service
            .login(
                &request.username,
                &request.password,
                state.config.session_ttl_minutes,
            )
            .await?;

        let response = LoginResponse {
            token: session.token.clone(),
            role: session.role,
            first_name: session.first_name.clone(),
            last_name: session.last_name.clone(),
            expires_at: session.expires_at,
        };

        // Opportunistic pruning keeps the map from accumulating dead entries
        state.cleanup_expired_sessions().await;
        state.store_session(session).await;

        Ok(response)
    }

    pub async fn logout(state: &AppState, token: &str) -> Result<(), AppError> {
        if state.remove_session(token).await {
            Ok(())
        } else {
            Err(AppError::Unauthorized("Unknown session".to_string()))
        }
    }
}
