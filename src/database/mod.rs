//! Database connection handling.

pub mod connection;

pub use connection::create_pool;
