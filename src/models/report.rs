//! Aggregate report row models.
//!
//! All three reports are fixed GROUP BY queries; averages are nullable
//! because they are guarded against empty groups in SQL.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Per-salesperson sales performance
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SalespersonPerformanceRow {
    pub user_id: i32,
    pub salesperson: String,
    pub vehicles_sold: i64,
    pub total_sold_price: Option<Decimal>,
    pub avg_sale_price: Option<Decimal>,
}

/// Per-customer payouts for vehicles the dealer acquired
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SellerPayoutRow {
    pub customer_id: i32,
    pub seller_name: String,
    pub vehicles_sold_to_dealer: i64,
    pub total_paid: Option<Decimal>,
}

/// Per-vendor part spend; avg is NULL when no parts were purchased
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VendorStatisticsRow {
    pub vendor_id: i32,
    pub vendor_name: String,
    pub parts_purchased: Option<i64>,
    pub total_spent: Option<Decimal>,
    pub avg_cost_per_part: Option<Decimal>,
}
