//! Distinct values feeding the filter controls: only manufacturers, types,
//! years, fuels and colors that actually occur in inventory.

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::utils::errors::AppError;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ManufacturerOption {
    pub manufacturer_id: i32,
    pub manufacturer_name: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VehicleTypeOption {
    pub vehicle_type_id: i32,
    pub vehicle_type_name: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ColorOption {
    pub color_id: i32,
    pub color_name: String,
}

pub struct FilterOptionRepository {
    pool: PgPool,
}

impl FilterOptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn manufacturers(&self) -> Result<Vec<ManufacturerOption>, AppError> {
        let rows = sqlx::query_as::<_, ManufacturerOption>(
            "SELECT DISTINCT m.manufacturer_id, m.manufacturer_name \
             FROM vehicles v \
             INNER JOIN manufacturers m ON m.manufacturer_id = v.manufacturer_id \
             ORDER BY m.manufacturer_name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn vehicle_types(&self) -> Result<Vec<VehicleTypeOption>, AppError> {
        let rows = sqlx::query_as::<_, VehicleTypeOption>(
            "SELECT DISTINCT vt.vehicle_type_id, vt.vehicle_type_name \
             FROM vehicles v \
             INNER JOIN vehicle_types vt ON vt.vehicle_type_id = v.vehicle_type_id \
             ORDER BY vt.vehicle_type_name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn model_years(&self) -> Result<Vec<i32>, AppError> {
        let rows: Vec<(i32,)> =
            sqlx::query_as("SELECT DISTINCT model_year FROM vehicles ORDER BY model_year")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(|(year,)| year).collect())
    }

    pub async fn fuel_types(&self) -> Result<Vec<String>, AppError> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT DISTINCT fuel_type FROM vehicles ORDER BY fuel_type")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(|(fuel,)| fuel).collect())
    }

    pub async fn colors(&self) -> Result<Vec<ColorOption>, AppError> {
        let rows = sqlx::query_as::<_, ColorOption>(
            "SELECT DISTINCT c.color_id, c.color_name \
             FROM vehicle_colors vc \
             INNER JOIN colors c ON c.color_id = vc.color_id \
             ORDER BY c.color_name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
