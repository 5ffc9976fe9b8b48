//! Vehicle reads and the single part-status write.

use sqlx::PgPool;

use crate::models::part::{PartRow, PART_STATUS_INSTALLED};
use crate::models::transaction::TransactionPartiesRow;
use crate::models::vehicle::VehicleRow;
use crate::query::builder::{PARTS_FOR_VEHICLE_SQL, TRANSACTION_PARTIES_SQL};
use crate::query::{VehicleFilters, VehicleQuery, VehicleScope};
use crate::utils::errors::{not_found_error, AppResult};

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List vehicles for a scope with whatever filter criteria survived
    /// coercion.
    pub async fn list(
        &self,
        scope: VehicleScope,
        filters: &VehicleFilters,
    ) -> AppResult<Vec<VehicleRow>> {
        if !filters.is_empty() {
            log::debug!("Listing {:?} vehicles with filters {:?}", scope, filters);
        }
        let mut query = VehicleQuery::list(scope, filters).into_query_builder();
        let vehicles = query
            .build_query_as::<VehicleRow>()
            .fetch_all(&self.pool)
            .await?;
        Ok(vehicles)
    }

    /// Fetch one vehicle; zero rows is a typed NotFound, never an index
    /// fault for the caller to stumble over.
    pub async fn find_by_id(&self, vehicle_id: i32) -> AppResult<VehicleRow> {
        let mut query = VehicleQuery::by_id(vehicle_id).into_query_builder();
        let vehicle = query
            .build_query_as::<VehicleRow>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", vehicle_id))?;
        Ok(vehicle)
    }

    /// Parts across all of the vehicle's part orders, in (order, part) order
    pub async fn parts_for_vehicle(&self, vehicle_id: i32) -> AppResult<Vec<PartRow>> {
        let parts = sqlx::query_as::<_, PartRow>(PARTS_FOR_VEHICLE_SQL)
            .bind(vehicle_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(parts)
    }

    /// Resolve both transaction sides for a vehicle; a vehicle with no
    /// transactions still yields a row with both sides null.
    pub async fn transaction_parties(
        &self,
        vehicle_id: i32,
    ) -> AppResult<Option<TransactionPartiesRow>> {
        let row = sqlx::query_as::<_, TransactionPartiesRow>(TRANSACTION_PARTIES_SQL)
            .bind(vehicle_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// One-way transition of a part to Installed. Single row by primary
    /// key; zero rows affected means the part does not exist.
    pub async fn install_part(&self, part_id: i32) -> AppResult<()> {
        let result = sqlx::query("UPDATE parts SET status = $1 WHERE part_id = $2")
            .bind(PART_STATUS_INSTALLED)
            .bind(part_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Part", part_id));
        }
        Ok(())
    }
}
