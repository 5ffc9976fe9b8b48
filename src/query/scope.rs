//! Vehicle list scopes.

use crate::models::user::Role;

/// Which eligibility predicate a vehicle list carries.
///
/// `Sellable` and `Unsold` are deliberately distinct: unsold only excludes
/// vehicles with a sale on record, sellable additionally requires every
/// part to be installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleScope {
    /// No sale recorded and all parts installed
    Sellable,
    /// No sale recorded, part status ignored
    Unsold,
    /// Every vehicle regardless of sale or part status
    All,
}

impl VehicleScope {
    /// Buyers browse everything still unsold; everyone else works from the
    /// sellable inventory.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Buyer => VehicleScope::Unsold,
            Role::Owner | Role::Other => VehicleScope::Sellable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buyer_sees_unsold() {
        assert_eq!(VehicleScope::for_role(Role::Buyer), VehicleScope::Unsold);
    }

    #[test]
    fn other_roles_see_sellable() {
        assert_eq!(VehicleScope::for_role(Role::Owner), VehicleScope::Sellable);
        assert_eq!(VehicleScope::for_role(Role::Other), VehicleScope::Sellable);
    }
}
