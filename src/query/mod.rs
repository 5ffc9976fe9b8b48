//! Query construction core: scopes, filter coercion, and the
//! parameter-bound builder the repositories execute.

pub mod builder;
pub mod filters;
pub mod reports;
pub mod scope;

pub use builder::VehicleQuery;
pub use filters::{ColorFilter, RawVehicleFilters, VehicleFilters};
pub use scope::VehicleScope;
