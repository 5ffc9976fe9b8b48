//! Shared application state.
//!
//! Holds the connection pool, environment configuration, and the in-memory
//! session store keyed by opaque token. Sessions carry the role and name
//! a request needs; everything else lives in the relational store.

use std::collections::HashMap;
use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;
use crate::models::user::Role;

/// One logged-in session
#[derive(Clone, Debug)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

impl Session {
    pub fn new(token: String, role: Role, first_name: String, last_name: String, ttl_minutes: i64) -> Self {
        Self {
            token,
            role,
            first_name,
            last_name,
            expires_at: chrono::Utc::now() + chrono::Duration::minutes(ttl_minutes),
        }
    }

    pub fn is_expired(&self) -> bool {
        chrono::Utc::now() > self.expires_at
    }
}

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            pool,
            config,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Store a freshly issued session under its token
    pub async fn store_session(&self, session: Session) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.token.clone(), session);
        log::debug!("Session stored, {} active", sessions.len());
    }

    /// Resolve a token to a live session; expired sessions do not resolve
    pub async fn get_session(&self, token: &str) -> Option<Session> {
        let sessions = self.sessions.read().await;
        sessions.get(token).filter(|s| !s.is_expired()).cloned()
    }

    /// Drop a session, returning whether it existed
    pub async fn remove_session(&self, token: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token).is_some()
    }

    /// Prune sessions past their expiry
    pub async fn cleanup_expired_sessions(&self) {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired());
        let dropped = before - sessions.len();
        if dropped > 0 {
            log::info!("Pruned {} expired session(s)", dropped);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(ttl_minutes: i64) -> Session {
        Session::new(
            "token-1".to_string(),
            Role::Owner,
            "Pat".to_string(),
            "Lee".to_string(),
            ttl_minutes,
        )
    }

    #[test]
    fn session_expiry_is_relative_to_now() {
        assert!(!session(5).is_expired());
        assert!(session(-1).is_expired());
    }

    #[tokio::test]
    async fn expired_sessions_do_not_resolve() {
        let config = EnvironmentConfig::for_tests();
        let pool = PgPool::connect_lazy("postgres://localhost/unused").expect("lazy pool");
        let state = AppState::new(pool, config);

        state.store_session(session(-1)).await;
        assert!(state.get_session("token-1").await.is_none());

        state.cleanup_expired_sessions().await;
        assert!(state.sessions.read().await.is_empty());
    }

    #[tokio::test]
    async fn remove_session_reports_presence() {
        let config = EnvironmentConfig::for_tests();
        let pool = PgPool::connect_lazy("postgres://localhost/unused").expect("lazy pool");
        let state = AppState::new(pool, config);

        state.store_session(session(5)).await;
        assert!(state.remove_session("token-1").await);
        assert!(!state.remove_session("token-1").await);
    }
}
