pub mod customer_repository;
pub mod filter_option_repository;
pub mod report_repository;
pub mod user_repository;
pub mod vehicle_repository;
