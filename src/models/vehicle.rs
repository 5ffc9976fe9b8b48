//! Vehicle row models.
//!
//! One row per vehicle, with the derived columns the base projection
//! surfaces: concatenated color names, type and manufacturer names, the
//! most recent purchase price/date/condition, and summed part cost.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Vehicle row as produced by the shared base projection
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VehicleRow {
    pub vehicle_id: i32,
    pub model_name: String,
    pub model_year: i32,
    pub fuel_type: String,
    pub manufacturer_id: Option<i32>,
    pub vehicle_type_id: Option<i32>,
    pub color_names: Option<String>,
    pub vehicle_type_name: Option<String>,
    pub manufacturer_name: Option<String>,
    pub purchase_price: Option<Decimal>,
    pub purchase_date: Option<NaiveDate>,
    pub vehicle_condition: Option<String>,
    pub total_part_cost: Option<Decimal>,
}
