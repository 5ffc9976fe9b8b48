//! Customer row models.

use serde::Serialize;
use sqlx::FromRow;

/// Full customer row, as returned from creation
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Customer {
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub id_number: String,
    pub phone_number: String,
    pub email_address: Option<String>,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub business_name: Option<String>,
}

/// Slim row for customer pick lists
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CustomerSummary {
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
}
