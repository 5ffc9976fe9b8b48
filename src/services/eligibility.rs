//! Sale eligibility, computed in-process from already-fetched detail rows.
//!
//! This is the post-fetch twin of the query-side `Sellable` predicate:
//! both must agree on the same vehicle data. A vehicle is eligible when no
//! buyer has been resolved from its transactions and every fetched part is
//! installed; an empty part list is vacuously installed.

use crate::models::part::PartRow;
use crate::models::transaction::TransactionParty;

/// Whether the vehicle can currently be offered for sale
pub fn eligible_for_sale(parts: &[PartRow], buyer: Option<&TransactionParty>) -> bool {
    buyer.is_none() && parts.iter().all(PartRow::is_installed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::part::PART_STATUS_INSTALLED;
    use rust_decimal::Decimal;

    fn part(status: &str) -> PartRow {
        PartRow {
            part_id: 1,
            part_order_id: 1,
            part_number: "FLT-220".to_string(),
            description: None,
            cost: Decimal::new(1250, 2),
            quantity: 2,
            status: status.to_string(),
            order_number: "PO-9".to_string(),
            vehicle_id: 4,
        }
    }

    fn buyer(customer_id: i32) -> TransactionParty {
        TransactionParty {
            customer_id,
            first_name: Some("Sam".to_string()),
            last_name: Some("Doe".to_string()),
            street: None,
            city: None,
            state: None,
            postal_code: None,
            phone_number: None,
            email_address: None,
        }
    }

    #[test]
    fn no_parts_and_no_buyer_is_eligible() {
        assert!(eligible_for_sale(&[], None));
    }

    #[test]
    fn a_buyer_blocks_eligibility_even_with_all_parts_installed() {
        let parts = vec![part(PART_STATUS_INSTALLED)];
        assert!(!eligible_for_sale(&parts, Some(&buyer(7))));
    }

    #[test]
    fn one_uninstalled_part_blocks_eligibility() {
        let parts = vec![part(PART_STATUS_INSTALLED), part("Ordered")];
        assert!(!eligible_for_sale(&parts, None));
    }

    #[test]
    fn many_installed_parts_and_no_buyer_is_eligible() {
        let parts = vec![
            part(PART_STATUS_INSTALLED),
            part(PART_STATUS_INSTALLED),
            part(PART_STATUS_INSTALLED),
        ];
        assert!(eligible_for_sale(&parts, None));
    }
}
