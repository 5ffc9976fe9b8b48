//! Vehicle request orchestration.

use sqlx::PgPool;

use crate::dto::vehicle_dto::{FilterOptionsResponse, VehicleDetailResponse};
use crate::models::user::Role;
use crate::models::vehicle::VehicleRow;
use crate::query::{RawVehicleFilters, VehicleFilters, VehicleScope};
use crate::repositories::filter_option_repository::FilterOptionRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::eligibility::eligible_for_sale;
use crate::utils::errors::AppError;

pub struct VehicleController {
    repository: VehicleRepository,
    filter_options: FilterOptionRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            filter_options: FilterOptionRepository::new(pool),
        }
    }

    /// Scope follows the session role: buyers browse unsold stock, every
    /// other role works from the sellable inventory.
    pub async fn list(
        &self,
        role: Role,
        raw_filters: RawVehicleFilters,
    ) -> Result<Vec<VehicleRow>, AppError> {
        let filters = VehicleFilters::from(raw_filters);
        let scope = VehicleScope::for_role(role);
        self.repository.list(scope, &filters).await
    }

    /// Owner view: every vehicle regardless of sale or part status
    pub async fn list_all(
        &self,
        raw_filters: RawVehicleFilters,
    ) -> Result<Vec<VehicleRow>, AppError> {
        let filters = VehicleFilters::from(raw_filters);
        self.repository.list(VehicleScope::All, &filters).await
    }

    /// Assemble the detail view: vehicle row, parts, transaction parties,
    /// and the in-process eligibility decision.
    pub async fn detail(&self, vehicle_id: i32) -> Result<VehicleDetailResponse, AppError> {
        let vehicle = self.repository.find_by_id(vehicle_id).await?;
        let parts = self.repository.parts_for_vehicle(vehicle_id).await?;
        let parties = self
            .repository
            .transaction_parties(vehicle_id)
            .await?
            .map(|row| row.into_parties())
            .unwrap_or_default();

        let eligible = eligible_for_sale(&parts, parties.buyer.as_ref());

        Ok(VehicleDetailResponse {
            vehicle,
            parts,
            seller: parties.seller,
            buyer: parties.buyer,
            eligible_for_sale: eligible,
        })
    }

    pub async fn install_part(&self, part_id: i32) -> Result<(), AppError> {
        self.repository.install_part(part_id).await
    }

    pub async fn filter_options(&self) -> Result<FilterOptionsResponse, AppError> {
        Ok(FilterOptionsResponse {
            manufacturers: self.filter_options.manufacturers().await?,
            vehicle_types: self.filter_options.vehicle_types().await?,
            model_years: self.filter_options.model_years().await?,
            fuel_types: self.filter_options.fuel_types().await?,
            colors: self.filter_options.colors().await?,
        })
    }
}
