//! Customer request orchestration.

use sqlx::PgPool;
use validator::Validate;

use crate::dto::customer_dto::CreateCustomerRequest;
use crate::dto::ApiResponse;
use crate::models::customer::{Customer, CustomerSummary};
use crate::repositories::customer_repository::CustomerRepository;
use crate::utils::errors::AppError;

pub struct CustomerController {
    repository: CustomerRepository,
}

impl CustomerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CustomerRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<CustomerSummary>, AppError> {
        self.repository.list().await
    }

    pub async fn create(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<ApiResponse<Customer>, AppError> {
        // Blank optionals become absent before validation runs
        let request = request.normalized();
        request.validate()?;

        let customer = self
            .repository
            .create(
                request.first_name,
                request.last_name,
                request.id_number,
                request.phone_number,
                request.email_address,
                request.street,
                request.city,
                request.state,
                request.postal_code,
                request.business_name,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            customer,
            "Customer created successfully".to_string(),
        ))
    }
}
