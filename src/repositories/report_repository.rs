//! Aggregate report reads.

use sqlx::PgPool;

use crate::models::report::{SalespersonPerformanceRow, SellerPayoutRow, VendorStatisticsRow};
use crate::query::reports::{
    SALESPERSON_PERFORMANCE_SQL, SELLER_PAYOUTS_SQL, VENDOR_STATISTICS_SQL,
};
use crate::utils::errors::AppError;

pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn salesperson_performance(
        &self,
    ) -> Result<Vec<SalespersonPerformanceRow>, AppError> {
        let rows = sqlx::query_as::<_, SalespersonPerformanceRow>(SALESPERSON_PERFORMANCE_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn seller_payouts(&self) -> Result<Vec<SellerPayoutRow>, AppError> {
        let rows = sqlx::query_as::<_, SellerPayoutRow>(SELLER_PAYOUTS_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn vendor_statistics(&self) -> Result<Vec<VendorStatisticsRow>, AppError> {
        let rows = sqlx::query_as::<_, VendorStatisticsRow>(VENDOR_STATISTICS_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
