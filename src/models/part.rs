//! Part row model.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Status value a part must reach before its vehicle becomes sellable
pub const PART_STATUS_INSTALLED: &str = "Installed";

/// Part row joined with its part order for a given vehicle
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PartRow {
    pub part_id: i32,
    pub part_order_id: i32,
    pub part_number: String,
    pub description: Option<String>,
    pub cost: Decimal,
    pub quantity: i32,
    pub status: String,
    pub order_number: String,
    pub vehicle_id: i32,
}

impl PartRow {
    /// Whether this part has reached the terminal Installed state
    pub fn is_installed(&self) -> bool {
        self.status == PART_STATUS_INSTALLED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn part(status: &str) -> PartRow {
        PartRow {
            part_id: 1,
            part_order_id: 1,
            part_number: "BRK-100".to_string(),
            description: None,
            cost: Decimal::new(4999, 2),
            quantity: 1,
            status: status.to_string(),
            order_number: "PO-1".to_string(),
            vehicle_id: 1,
        }
    }

    #[test]
    fn installed_matches_exact_status() {
        assert!(part("Installed").is_installed());
        assert!(!part("Ordered").is_installed());
        assert!(!part("installed").is_installed());
    }
}
