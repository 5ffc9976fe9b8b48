use axum::{extract::State, routing::get, Extension, Json, Router};

use crate::controllers::report_controller::ReportController;
use crate::middleware::session::{require_owner, CurrentUser};
use crate::models::report::{SalespersonPerformanceRow, SellerPayoutRow, VendorStatisticsRow};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/sales", get(salesperson_performance))
        .route("/sellers", get(seller_payouts))
        .route("/vendors", get(vendor_statistics))
}

async fn salesperson_performance(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<SalespersonPerformanceRow>>, AppError> {
    require_owner(&user)?;
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.salesperson_performance().await?))
}

async fn seller_payouts(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<SellerPayoutRow>>, AppError> {
    require_owner(&user)?;
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.seller_payouts().await?))
}

async fn vendor_statistics(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<VendorStatisticsRow>>, AppError> {
    require_owner(&user)?;
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.vendor_statistics().await?))
}
