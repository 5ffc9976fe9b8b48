//! Session middleware: resolves the Bearer token to a live session and
//! exposes it to handlers as a `CurrentUser` extension.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::models::user::Role;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// The authenticated caller, as handlers see it
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub token: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
}

/// Extract `Bearer <token>` from the Authorization header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// Reject requests without a valid, unexpired session
pub async fn session_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())
        .ok_or_else(|| AppError::Unauthorized("Missing session token".to_string()))?
        .to_string();

    let session = state
        .get_session(&token)
        .await
        .ok_or_else(|| AppError::Unauthorized("Invalid or expired session".to_string()))?;

    request.extensions_mut().insert(CurrentUser {
        token,
        role: session.role,
        first_name: session.first_name,
        last_name: session.last_name,
    });

    Ok(next.run(request).await)
}

/// Owner-only gate for report and full-inventory endpoints
pub fn require_owner(user: &CurrentUser) -> Result<(), AppError> {
    if user.role == Role::Owner {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "This page is restricted to owners".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_strips_the_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Bearer abc-123"));
        assert_eq!(bearer_token(&headers), Some("abc-123"));
    }

    #[test]
    fn non_bearer_credentials_are_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn owner_gate_checks_role() {
        let owner = CurrentUser {
            token: "t".to_string(),
            role: Role::Owner,
            first_name: "A".to_string(),
            last_name: "B".to_string(),
        };
        let buyer = CurrentUser {
            role: Role::Buyer,
            ..owner.clone()
        };
        assert!(require_owner(&owner).is_ok());
        assert!(require_owner(&buyer).is_err());
    }
}
