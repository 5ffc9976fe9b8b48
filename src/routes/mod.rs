pub mod auth_routes;
pub mod customer_routes;
pub mod report_routes;
pub mod vehicle_routes;
