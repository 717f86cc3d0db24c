//! Text matching and ordering shared by store implementations.

use std::cmp::Reverse;

use crate::model::Customer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Name,
}

/// Case-insensitive substring match against name or code.
/// `needle` must already be lowercased.
fn matches_lowered(customer: &Customer, needle: &str) -> bool {
    customer.name().to_lowercase().contains(needle)
        || customer.code().to_lowercase().contains(needle)
}

/// Matching customers in input order. An empty term matches nothing.
pub fn filter_by_text<'a, I>(customers: I, term: &str) -> Vec<Customer>
where
    I: IntoIterator<Item = &'a Customer>,
{
    if term.is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();
    customers
        .into_iter()
        .filter(|c| matches_lowered(c, &needle))
        .cloned()
        .collect()
}

/// Sorts in place with a stable sort: customers whose keys compare equal keep
/// their incoming order in both directions.
pub fn sort_customers(customers: &mut [Customer], key: SortKey, ascending: bool) {
    match (key, ascending) {
        (SortKey::Id, true) => customers.sort_by_key(Customer::id),
        (SortKey::Id, false) => customers.sort_by_key(|c| Reverse(c.id())),
        (SortKey::Name, true) => customers.sort_by_cached_key(|c| c.name().to_lowercase()),
        (SortKey::Name, false) => {
            customers.sort_by_cached_key(|c| Reverse(c.name().to_lowercase()))
        }
    }
}
