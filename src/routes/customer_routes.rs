use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::customer_controller::CustomerController;
use crate::dto::customer_dto::CreateCustomerRequest;
use crate::dto::ApiResponse;
use crate::models::customer::{Customer, CustomerSummary};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_customer_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers))
        .route("/", post(create_customer))
}

async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerSummary>>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let customers = controller.list().await?;
    Ok(Json(customers))
}

async fn create_customer(
    State(state): State<AppState>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<Json<ApiResponse<Customer>>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}
