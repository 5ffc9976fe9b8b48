//! Aggregate report orchestration.

use sqlx::PgPool;

use crate::models::report::{SalespersonPerformanceRow, SellerPayoutRow, VendorStatisticsRow};
use crate::repositories::report_repository::ReportRepository;
use crate::utils::errors::AppError;

pub struct ReportController {
    repository: ReportRepository,
}

impl ReportController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ReportRepository::new(pool),
        }
    }

    pub async fn salesperson_performance(
        &self,
    ) -> Result<Vec<SalespersonPerformanceRow>, AppError> {
        self.repository.salesperson_performance().await
    }

    pub async fn seller_payouts(&self) -> Result<Vec<SellerPayoutRow>, AppError> {
        self.repository.seller_payouts().await
    }

    pub async fn vendor_statistics(&self) -> Result<Vec<VendorStatisticsRow>, AppError> {
        self.repository.vendor_statistics().await
    }
}
