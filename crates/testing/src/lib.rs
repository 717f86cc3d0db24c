//! Behavioural checks that any `CustomerStore` must pass.

use custledger_core::{Customer, CustomerStore};

/// Builds a valid customer whose name and code are derived from `id`.
pub fn sample_customer(id: i64) -> Customer {
    Customer::new(id, &format!("Customer {id}"), &format!("C{id}"), None)
        .unwrap_or_else(|e| panic!("fixture id {id} is invalid: {e}"))
}

pub fn live_ids(store: &dyn CustomerStore) -> Vec<i64> {
    store.all().iter().map(Customer::id).collect()
}
