//! Vehicle query construction.
//!
//! All vehicle reads share one base projection (one row per vehicle with
//! concatenated colors, type/manufacturer names, most recent purchase data
//! and summed part cost). Scope predicates and filter criteria are appended
//! as parameter-bound WHERE fragments; no value-shaped input is ever
//! interpolated into the SQL text.

use sqlx::{Postgres, QueryBuilder};

use super::filters::{ColorFilter, VehicleFilters};
use super::scope::VehicleScope;
use crate::models::part::PART_STATUS_INSTALLED;

/// Shared base projection for every vehicle scope.
///
/// The purchase side uses a LATERAL limited to the most recent transaction
/// by date, which makes the at-most-one-transaction assumption explicit
/// instead of depending on whatever row the store returns first.
const VEHICLE_BASE_SELECT: &str = "\
SELECT
    v.vehicle_id,
    v.model_name,
    v.model_year,
    v.fuel_type,
    v.manufacturer_id,
    v.vehicle_type_id,
    vcl.color_names,
    vt.vehicle_type_name,
    m.manufacturer_name,
    pt.purchase_price,
    pt.purchase_date,
    pt.vehicle_condition,
    vpc.total_part_cost
FROM vehicles v
LEFT JOIN manufacturers m ON m.manufacturer_id = v.manufacturer_id
LEFT JOIN vehicle_types vt ON vt.vehicle_type_id = v.vehicle_type_id
LEFT JOIN LATERAL (
    SELECT purchase_price, purchase_date, vehicle_condition
    FROM purchase_transactions
    WHERE vehicle_id = v.vehicle_id
    ORDER BY purchase_date DESC, purchase_transaction_id DESC
    LIMIT 1
) pt ON TRUE
LEFT JOIN (
    SELECT po.vehicle_id, SUM(p.cost) AS total_part_cost
    FROM part_orders po
    INNER JOIN parts p ON p.part_order_id = po.part_order_id
    GROUP BY po.vehicle_id
) vpc ON vpc.vehicle_id = v.vehicle_id
LEFT JOIN (
    SELECT vc.vehicle_id,
           string_agg(c.color_name, ', ' ORDER BY c.color_name) AS color_names
    FROM vehicle_colors vc
    INNER JOIN colors c ON c.color_id = vc.color_id
    GROUP BY vc.vehicle_id
) vcl ON vcl.vehicle_id = v.vehicle_id";

/// Parts joined with their part order for one vehicle, in a stable
/// (part order, part) order. Binds: $1 = vehicle id.
pub const PARTS_FOR_VEHICLE_SQL: &str = "\
SELECT
    p.part_id,
    p.part_order_id,
    p.part_number,
    p.description,
    p.cost,
    p.quantity,
    p.status,
    po.order_number,
    v.vehicle_id
FROM part_orders po
INNER JOIN parts p ON p.part_order_id = po.part_order_id
INNER JOIN vehicles v ON v.vehicle_id = po.vehicle_id
WHERE v.vehicle_id = $1
ORDER BY po.part_order_id, p.part_id";

/// Both transaction sides for one vehicle in a single row, each side
/// independently nullable, most recent transaction winning per side.
/// Binds: $1 = vehicle id.
pub const TRANSACTION_PARTIES_SQL: &str = "\
SELECT
    pt.customer_id AS seller_customer_id,
    c1.first_name AS seller_first_name,
    c1.last_name AS seller_last_name,
    c1.street AS seller_street,
    c1.city AS seller_city,
    c1.state AS seller_state,
    c1.postal_code AS seller_postal_code,
    c1.phone_number AS seller_phone_number,
    c1.email_address AS seller_email_address,
    s.customer_id AS buyer_customer_id,
    c2.first_name AS buyer_first_name,
    c2.last_name AS buyer_last_name,
    c2.street AS buyer_street,
    c2.city AS buyer_city,
    c2.state AS buyer_state,
    c2.postal_code AS buyer_postal_code,
    c2.phone_number AS buyer_phone_number,
    c2.email_address AS buyer_email_address
FROM vehicles v
LEFT JOIN LATERAL (
    SELECT customer_id
    FROM purchase_transactions
    WHERE vehicle_id = v.vehicle_id
    ORDER BY purchase_date DESC, purchase_transaction_id DESC
    LIMIT 1
) pt ON TRUE
LEFT JOIN customers c1 ON c1.customer_id = pt.customer_id
LEFT JOIN LATERAL (
    SELECT customer_id
    FROM sales_transactions
    WHERE vehicle_id = v.vehicle_id
    ORDER BY sale_date DESC, sales_transaction_id DESC
    LIMIT 1
) s ON TRUE
LEFT JOIN customers c2 ON c2.customer_id = s.customer_id
WHERE v.vehicle_id = $1
LIMIT 1";

/// Builder for the vehicle list and by-id scopes
pub struct VehicleQuery {
    query: QueryBuilder<'static, Postgres>,
    has_conditions: bool,
}

impl VehicleQuery {
    /// Build a list query for the given scope, ANDing in every valid
    /// filter criterion on top of the scope's eligibility predicate.
    pub fn list(scope: VehicleScope, filters: &VehicleFilters) -> Self {
        let mut builder = Self {
            query: QueryBuilder::new(VEHICLE_BASE_SELECT),
            has_conditions: false,
        };

        match scope {
            VehicleScope::Sellable => {
                builder.no_sale_recorded();
                builder.all_parts_installed();
            }
            VehicleScope::Unsold => {
                builder.no_sale_recorded();
            }
            VehicleScope::All => {}
        }

        builder.apply_filters(filters);

        // Listing order is part of the contract: model name wins,
        // reverse-alphabetically, manufacturer breaks ties ascending.
        if matches!(scope, VehicleScope::Sellable | VehicleScope::Unsold) {
            builder
                .query
                .push(" ORDER BY v.model_name DESC, m.manufacturer_name ASC");
        }

        builder
    }

    /// Build the single-vehicle detail query
    pub fn by_id(vehicle_id: i32) -> Self {
        let mut builder = Self {
            query: QueryBuilder::new(VEHICLE_BASE_SELECT),
            has_conditions: false,
        };
        builder.push_condition();
        builder.query.push("v.vehicle_id = ");
        builder.query.push_bind(vehicle_id);
        builder.query.push(" LIMIT 1");
        builder
    }

    pub fn into_query_builder(self) -> QueryBuilder<'static, Postgres> {
        self.query
    }

    #[cfg(test)]
    fn into_sql(self) -> String {
        self.query.into_sql()
    }

    fn push_condition(&mut self) {
        if self.has_conditions {
            self.query.push(" AND ");
        } else {
            self.query.push(" WHERE ");
            self.has_conditions = true;
        }
    }

    /// Excludes vehicles with a sale on record
    fn no_sale_recorded(&mut self) {
        self.push_condition();
        self.query.push(
            "NOT EXISTS (SELECT 1 FROM sales_transactions s WHERE s.vehicle_id = v.vehicle_id)",
        );
    }

    /// Excludes vehicles with any part not yet installed. A vehicle with
    /// no part orders passes vacuously.
    fn all_parts_installed(&mut self) {
        self.push_condition();
        self.query.push(
            "NOT EXISTS (\
             SELECT 1 FROM part_orders po \
             INNER JOIN parts p ON p.part_order_id = po.part_order_id \
             WHERE po.vehicle_id = v.vehicle_id AND p.status <> ",
        );
        self.query.push_bind(PART_STATUS_INSTALLED);
        self.query.push(")");
    }

    fn apply_filters(&mut self, filters: &VehicleFilters) {
        if let Some(manufacturer_id) = filters.manufacturer_id {
            self.push_condition();
            self.query.push("v.manufacturer_id = ");
            self.query.push_bind(manufacturer_id);
        }

        if let Some(vehicle_type_id) = filters.vehicle_type_id {
            self.push_condition();
            self.query.push("v.vehicle_type_id = ");
            self.query.push_bind(vehicle_type_id);
        }

        if let Some(model_year) = filters.model_year {
            self.push_condition();
            self.query.push("v.model_year = ");
            self.query.push_bind(model_year);
        }

        if let Some(fuel_type) = filters.fuel_type.clone() {
            self.push_condition();
            self.query.push("v.fuel_type = ");
            self.query.push_bind(fuel_type);
        }

        // Existential match: any associated color satisfies the criterion
        if let Some(color) = filters.color.clone() {
            self.push_condition();
            self.query.push(
                "EXISTS (\
                 SELECT 1 FROM vehicle_colors vc \
                 INNER JOIN colors c ON c.color_id = vc.color_id \
                 WHERE vc.vehicle_id = v.vehicle_id AND ",
            );
            match color {
                ColorFilter::Id(color_id) => {
                    self.query.push("vc.color_id = ");
                    self.query.push_bind(color_id);
                }
                ColorFilter::Name(color_name) => {
                    self.query.push("c.color_name = ");
                    self.query.push_bind(color_name);
                }
            }
            self.query.push(")");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::filters::RawVehicleFilters;

    const NO_SALE_FRAGMENT: &str =
        "NOT EXISTS (SELECT 1 FROM sales_transactions s WHERE s.vehicle_id = v.vehicle_id)";
    const PARTS_FRAGMENT: &str = "p.status <> ";
    const ORDER_FRAGMENT: &str = "ORDER BY v.model_name DESC, m.manufacturer_name ASC";

    #[test]
    fn sellable_applies_both_eligibility_predicates() {
        let sql = VehicleQuery::list(VehicleScope::Sellable, &VehicleFilters::default()).into_sql();
        assert!(sql.contains(NO_SALE_FRAGMENT));
        assert!(sql.contains(PARTS_FRAGMENT));
        assert!(sql.contains(ORDER_FRAGMENT));
    }

    #[test]
    fn unsold_ignores_part_installation() {
        let sql = VehicleQuery::list(VehicleScope::Unsold, &VehicleFilters::default()).into_sql();
        assert!(sql.contains(NO_SALE_FRAGMENT));
        assert!(!sql.contains(PARTS_FRAGMENT));
        assert!(sql.contains(ORDER_FRAGMENT));
    }

    #[test]
    fn all_scope_has_no_eligibility_predicate_and_no_forced_order() {
        let sql = VehicleQuery::list(VehicleScope::All, &VehicleFilters::default()).into_sql();
        // The only WHERE is inside the base projection's purchase LATERAL
        assert_eq!(sql.matches(" WHERE ").count(), 1);
        assert!(!sql.contains("NOT EXISTS"));
        assert!(!sql.contains(ORDER_FRAGMENT));
    }

    #[test]
    fn filter_values_are_bound_never_interpolated() {
        let filters = VehicleFilters::from(RawVehicleFilters {
            manufacturer: Some("3".to_string()),
            model_year: Some("2019".to_string()),
            fuel_type: Some("Electric".to_string()),
            ..Default::default()
        });
        let sql = VehicleQuery::list(VehicleScope::All, &filters).into_sql();

        assert!(sql.contains("v.manufacturer_id = $1"));
        assert!(sql.contains("v.model_year = $2"));
        assert!(sql.contains("v.fuel_type = $3"));
        assert!(!sql.contains("2019"));
        assert!(!sql.contains("Electric"));
    }

    #[test]
    fn filters_combine_with_and_on_top_of_the_scope_predicate() {
        let filters = VehicleFilters::from(RawVehicleFilters {
            manufacturer: Some("3".to_string()),
            fuel_type: Some("Electric".to_string()),
            ..Default::default()
        });
        let sql = VehicleQuery::list(VehicleScope::Unsold, &filters).into_sql();

        assert!(sql.contains(NO_SALE_FRAGMENT));
        assert!(sql.contains("v.manufacturer_id = $1"));
        assert!(sql.contains("v.fuel_type = $2"));
        // One AND per criterion, on top of the scope predicate
        assert_eq!(sql.matches(" AND ").count(), 2);
    }

    #[test]
    fn color_by_id_and_by_name_share_the_exists_shape() {
        let by_id = VehicleFilters::from(RawVehicleFilters {
            color: Some("5".to_string()),
            ..Default::default()
        });
        let by_name = VehicleFilters::from(RawVehicleFilters {
            color: Some("Red".to_string()),
            ..Default::default()
        });

        let id_sql = VehicleQuery::list(VehicleScope::All, &by_id).into_sql();
        let name_sql = VehicleQuery::list(VehicleScope::All, &by_name).into_sql();

        assert!(id_sql.contains("EXISTS ("));
        assert!(name_sql.contains("EXISTS ("));
        assert!(id_sql.contains("vc.color_id = $1"));
        assert!(name_sql.contains("c.color_name = $1"));
        assert!(!name_sql.contains("Red"));
    }

    #[test]
    fn sellable_binds_keep_counting_past_the_status_placeholder() {
        // 'Installed' is bound as $1, so the first filter lands on $2
        let filters = VehicleFilters::from(RawVehicleFilters {
            manufacturer: Some("9".to_string()),
            ..Default::default()
        });
        let sql = VehicleQuery::list(VehicleScope::Sellable, &filters).into_sql();
        assert!(sql.contains("p.status <> $1"));
        assert!(sql.contains("v.manufacturer_id = $2"));
    }

    #[test]
    fn by_id_binds_the_path_parameter_and_limits_to_one_row() {
        let sql = VehicleQuery::by_id(17).into_sql();
        assert!(sql.contains("v.vehicle_id = $1"));
        assert!(sql.ends_with("LIMIT 1"));
        assert!(!sql.contains("17"));
    }

    #[test]
    fn fixed_detail_queries_bind_the_vehicle_id() {
        assert!(PARTS_FOR_VEHICLE_SQL.contains("v.vehicle_id = $1"));
        assert!(PARTS_FOR_VEHICLE_SQL.contains("ORDER BY po.part_order_id, p.part_id"));
        assert!(TRANSACTION_PARTIES_SQL.contains("v.vehicle_id = $1"));
        assert!(TRANSACTION_PARTIES_SQL.ends_with("LIMIT 1"));
    }
}
