//! Row structs and domain types mapped from the relational schema.

pub mod customer;
pub mod part;
pub mod report;
pub mod transaction;
pub mod user;
pub mod vehicle;
