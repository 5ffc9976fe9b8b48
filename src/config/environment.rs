//! Environment-driven configuration.

use std::env;

/// Runtime configuration, read once at startup
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub session_ttl_minutes: i64,
    pub cors_origins: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            session_ttl_minutes: env::var("SESSION_TTL_MINUTES")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .expect("SESSION_TTL_MINUTES must be a valid number"),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|raw| raw.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_default(),
        }
    }
}

impl EnvironmentConfig {
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            session_ttl_minutes: 30,
            cors_origins: Vec::new(),
        }
    }
}
