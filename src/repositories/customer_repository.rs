//! Customer reads and creation.

use sqlx::PgPool;

use crate::models::customer::{Customer, CustomerSummary};
use crate::utils::errors::AppError;

pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Pick-list of customers, last name first
    pub async fn list(&self) -> Result<Vec<CustomerSummary>, AppError> {
        let customers = sqlx::query_as::<_, CustomerSummary>(
            "SELECT customer_id, first_name, last_name \
             FROM customers \
             ORDER BY last_name ASC, first_name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(customers)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        first_name: String,
        last_name: String,
        id_number: String,
        phone_number: String,
        email_address: Option<String>,
        street: String,
        city: String,
        state: String,
        postal_code: String,
        business_name: Option<String>,
    ) -> Result<Customer, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers
                (first_name, last_name, id_number, phone_number, email_address,
                 street, city, state, postal_code, business_name)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(id_number)
        .bind(phone_number)
        .bind(email_address)
        .bind(street)
        .bind(city)
        .bind(state)
        .bind(postal_code)
        .bind(business_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(customer)
    }
}
