use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::json;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{FilterOptionsResponse, VehicleDetailResponse};
use crate::middleware::session::{require_owner, CurrentUser};
use crate::models::vehicle::VehicleRow;
use crate::query::RawVehicleFilters;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/all", get(list_all_vehicles))
        .route("/filter-options", get(filter_options))
        .route("/:id", get(vehicle_detail))
        .route("/parts/:part_id/install", post(install_part))
}

/// Role-scoped inventory list with optional filter criteria
async fn list_vehicles(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Query(raw_filters): Query<RawVehicleFilters>,
) -> Result<Json<Vec<VehicleRow>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let vehicles = controller.list(user.role, raw_filters).await?;
    Ok(Json(vehicles))
}

/// Every vehicle regardless of status; owners only
async fn list_all_vehicles(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Query(raw_filters): Query<RawVehicleFilters>,
) -> Result<Json<Vec<VehicleRow>>, AppError> {
    require_owner(&user)?;
    let controller = VehicleController::new(state.pool.clone());
    let vehicles = controller.list_all(raw_filters).await?;
    Ok(Json(vehicles))
}

async fn filter_options(
    State(state): State<AppState>,
) -> Result<Json<FilterOptionsResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let options = controller.filter_options().await?;
    Ok(Json(options))
}

async fn vehicle_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<VehicleDetailResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let detail = controller.detail(id).await?;
    Ok(Json(detail))
}

async fn install_part(
    State(state): State<AppState>,
    Path(part_id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.install_part(part_id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Part marked as Installed"
    })))
}
