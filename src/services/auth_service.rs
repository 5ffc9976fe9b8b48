//! Credential verification and session issuance.
//!
//! Passwords are verified against bcrypt hashes stored on the user row.
//! A successful login issues an opaque UUID token; the session itself
//! lives in the in-memory store on `AppState`.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::User;
use crate::repositories::user_repository::UserRepository;
use crate::state::Session;
use crate::utils::errors::AppError;

pub struct AuthService {
    user_repository: UserRepository,
}

impl AuthService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            user_repository: UserRepository::new(pool),
        }
    }

    /// Verify credentials and build a session. Unknown usernames and wrong
    /// passwords fail identically.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        session_ttl_minutes: i64,
    ) -> Result<(Session, User), AppError> {
        let user = self
            .user_repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid username or password".to_string()))?;

        let valid = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| AppError::Hash(e.to_string()))?;

        if !valid {
            log::warn!("Failed login attempt for user '{}'", username);
            return Err(AppError::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        }

        let session = Session::new(
            Uuid::new_v4().to_string(),
            user.role(),
            user.first_name.clone(),
            user.last_name.clone(),
            session_ttl_minutes,
        );

        log::info!("User '{}' logged in with role {}", username, session.role);
        Ok((session, user))
    }
}
