//! Built-in demo dataset.

use crate::{errors::CoreError, model::Customer, traits::CustomerStore};

const DEFAULT_ROWS: &[(i64, &str, &str, Option<&str>)] = &[
    (101, "Alice Johnson", "AJ101", Some("123 Maple St.")),
    (102, "Bob Smith", "BS102", Some("456 Oak Ave.")),
    (103, "Carla Gomez", "CG103", None),
    (104, "Dmitri Petrov", "DP104", Some("9 Harbour Road, Unit 12")),
    (105, "Erin O'Neil", "EO105", Some("77 Birch Lane")),
];

/// The fixed default customers, ids 101 through 105.
pub fn default_customers() -> Vec<Customer> {
    DEFAULT_ROWS
        .iter()
        .map(|&(id, name, code, address)| {
            Customer::new(id, name, code, address)
                .unwrap_or_else(|e| panic!("default customer {id} is invalid: {e}"))
        })
        .collect()
}

/// Adds each customer, skipping ids that are already live. Any other error
/// stops seeding. Returns how many customers were inserted.
pub fn seed_store<S>(store: &S, customers: Vec<Customer>) -> Result<usize, CoreError>
where
    S: CustomerStore + ?Sized,
{
    let mut inserted = 0;
    for customer in customers {
        match store.add(customer) {
            Ok(()) => inserted += 1,
            Err(CoreError::DuplicateId(_)) => {}
            Err(e) => return Err(e),
        }
    }
    Ok(inserted)
}
