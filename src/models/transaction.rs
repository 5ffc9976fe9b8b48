//! Transaction party resolution for one vehicle.
//!
//! A single row carries both sides: the seller (the customer the dealer
//! acquired the vehicle from) and the buyer (the customer the dealer sold
//! it to). Either side can be absent independently.

use serde::Serialize;
use sqlx::FromRow;

/// Raw single-row result from the transaction-parties query
#[derive(Debug, Clone, FromRow)]
pub struct TransactionPartiesRow {
    pub seller_customer_id: Option<i32>,
    pub seller_first_name: Option<String>,
    pub seller_last_name: Option<String>,
    pub seller_street: Option<String>,
    pub seller_city: Option<String>,
    pub seller_state: Option<String>,
    pub seller_postal_code: Option<String>,
    pub seller_phone_number: Option<String>,
    pub seller_email_address: Option<String>,
    pub buyer_customer_id: Option<i32>,
    pub buyer_first_name: Option<String>,
    pub buyer_last_name: Option<String>,
    pub buyer_street: Option<String>,
    pub buyer_city: Option<String>,
    pub buyer_state: Option<String>,
    pub buyer_postal_code: Option<String>,
    pub buyer_phone_number: Option<String>,
    pub buyer_email_address: Option<String>,
}

/// One resolved party (seller or buyer) tied to a vehicle
#[derive(Debug, Clone, Serialize)]
pub struct TransactionParty {
    pub customer_id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub phone_number: Option<String>,
    pub email_address: Option<String>,
}

/// Both resolved sides of a vehicle's transactions
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionParties {
    pub seller: Option<TransactionParty>,
    pub buyer: Option<TransactionParty>,
}

impl TransactionPartiesRow {
    /// Split the joined row into independently present sides.
    /// A side exists iff its customer id column is non-null.
    pub fn into_parties(self) -> TransactionParties {
        let seller = self.seller_customer_id.map(|customer_id| TransactionParty {
            customer_id,
            first_name: self.seller_first_name,
            last_name: self.seller_last_name,
            street: self.seller_street,
            city: self.seller_city,
            state: self.seller_state,
            postal_code: self.seller_postal_code,
            phone_number: self.seller_phone_number,
            email_address: self.seller_email_address,
        });

        let buyer = self.buyer_customer_id.map(|customer_id| TransactionParty {
            customer_id,
            first_name: self.buyer_first_name,
            last_name: self.buyer_last_name,
            street: self.buyer_street,
            city: self.buyer_city,
            state: self.buyer_state,
            postal_code: self.buyer_postal_code,
            phone_number: self.buyer_phone_number,
            email_address: self.buyer_email_address,
        });

        TransactionParties { seller, buyer }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_row() -> TransactionPartiesRow {
        TransactionPartiesRow {
            seller_customer_id: None,
            seller_first_name: None,
            seller_last_name: None,
            seller_street: None,
            seller_city: None,
            seller_state: None,
            seller_postal_code: None,
            seller_phone_number: None,
            seller_email_address: None,
            buyer_customer_id: None,
            buyer_first_name: None,
            buyer_last_name: None,
            buyer_street: None,
            buyer_city: None,
            buyer_state: None,
            buyer_postal_code: None,
            buyer_phone_number: None,
            buyer_email_address: None,
        }
    }

    #[test]
    fn both_sides_absent() {
        let parties = empty_row().into_parties();
        assert!(parties.seller.is_none());
        assert!(parties.buyer.is_none());
    }

    #[test]
    fn sides_resolve_independently() {
        let mut row = empty_row();
        row.seller_customer_id = Some(3);
        row.seller_first_name = Some("Ana".to_string());

        let parties = row.into_parties();
        let seller = parties.seller.expect("seller should be present");
        assert_eq!(seller.customer_id, 3);
        assert_eq!(seller.first_name.as_deref(), Some("Ana"));
        assert!(parties.buyer.is_none());
    }

    #[test]
    fn buyer_presence_keys_off_customer_id_only() {
        let mut row = empty_row();
        // Name columns can be null even when the id resolves
        row.buyer_customer_id = Some(7);

        let parties = row.into_parties();
        assert_eq!(parties.buyer.expect("buyer").customer_id, 7);
    }
}
