//! User model and roles.
//!
//! Roles gate which vehicle scope a session sees and which endpoints are
//! reachable. Unknown role strings fall back to `Other` instead of failing.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User - maps to the users table
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub user_id: i32,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    pub fn role(&self) -> Role {
        Role::from(self.role.as_str())
    }
}

/// Explicit role enum, replacing the stringly session switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Buyer,
    Owner,
    Other,
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value {
            "Buyer" => Role::Buyer,
            "Owner" => Role::Owner,
            _ => Role::Other,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Buyer => "Buyer",
            Role::Owner => "Owner",
            Role::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_parse() {
        assert_eq!(Role::from("Buyer"), Role::Buyer);
        assert_eq!(Role::from("Owner"), Role::Owner);
    }

    #[test]
    fn unknown_role_falls_back_to_other() {
        assert_eq!(Role::from("Mechanic"), Role::Other);
        assert_eq!(Role::from(""), Role::Other);
        // Matching is case sensitive, same as the source data
        assert_eq!(Role::from("buyer"), Role::Other);
    }
}
