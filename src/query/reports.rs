//! Fixed aggregate report queries.
//!
//! All three are filter-less GROUP BY reads; each average is guarded by a
//! CASE so an empty denominator yields NULL instead of a division fault.

/// Per-salesperson sales count, revenue and average sale price
pub const SALESPERSON_PERFORMANCE_SQL: &str = "\
SELECT
    u.user_id,
    u.first_name || ' ' || u.last_name AS salesperson,
    COUNT(s.vehicle_id) AS vehicles_sold,
    SUM(pt.purchase_price) AS total_sold_price,
    CASE WHEN COUNT(s.vehicle_id) > 0
         THEN SUM(pt.purchase_price) / COUNT(s.vehicle_id)
    END AS avg_sale_price
FROM sales_transactions s
INNER JOIN users u ON u.user_id = s.user_id
LEFT JOIN purchase_transactions pt ON pt.vehicle_id = s.vehicle_id
GROUP BY u.user_id, u.first_name, u.last_name
ORDER BY vehicles_sold DESC, total_sold_price DESC";

/// Per-customer count and total paid for vehicles acquired by the dealer
pub const SELLER_PAYOUTS_SQL: &str = "\
SELECT
    c.customer_id,
    c.first_name || ' ' || c.last_name AS seller_name,
    COUNT(pt.vehicle_id) AS vehicles_sold_to_dealer,
    SUM(pt.purchase_price) AS total_paid
FROM purchase_transactions pt
INNER JOIN customers c ON c.customer_id = pt.customer_id
GROUP BY c.customer_id, c.first_name, c.last_name
ORDER BY vehicles_sold_to_dealer DESC, total_paid ASC";

/// Per-vendor part quantity, spend, and average cost per part.
/// The average is NULL for a vendor whose quantity sum is zero.
pub const VENDOR_STATISTICS_SQL: &str = "\
SELECT
    vd.vendor_id,
    vd.vendor_name,
    SUM(p.quantity) AS parts_purchased,
    SUM(p.cost * p.quantity) AS total_spent,
    CASE WHEN SUM(p.quantity) > 0
         THEN SUM(p.cost * p.quantity) / SUM(p.quantity)
         ELSE NULL
    END AS avg_cost_per_part
FROM part_orders po
INNER JOIN vendors vd ON vd.vendor_id = po.vendor_id
INNER JOIN parts p ON p.part_order_id = po.part_order_id
GROUP BY vd.vendor_id, vd.vendor_name
ORDER BY parts_purchased DESC";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_average_is_guarded_against_zero_quantity() {
        assert!(VENDOR_STATISTICS_SQL.contains("CASE WHEN SUM(p.quantity) > 0"));
        assert!(VENDOR_STATISTICS_SQL.contains("ELSE NULL"));
    }

    #[test]
    fn salesperson_average_is_guarded_against_zero_sales() {
        assert!(SALESPERSON_PERFORMANCE_SQL.contains("CASE WHEN COUNT(s.vehicle_id) > 0"));
    }

    #[test]
    fn reports_take_no_parameters() {
        for sql in [
            SALESPERSON_PERFORMANCE_SQL,
            SELLER_PAYOUTS_SQL,
            VENDOR_STATISTICS_SQL,
        ] {
            assert!(!sql.contains('$'));
        }
    }
}
