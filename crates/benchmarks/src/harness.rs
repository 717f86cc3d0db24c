use custledger_core::{Customer, CustomerStore};
use custledger_storage_ephemeral::EphemeralStore;

/// A store preloaded with a dataset.
pub struct LoadedStore {
    pub store: EphemeralStore,
}

impl LoadedStore {
    pub fn new(customers: &[Customer]) -> Self {
        let store = EphemeralStore::with_capacity(customers.len().max(1));
        fill(&store, customers);
        Self { store }
    }
}

pub fn fill<S>(store: &S, customers: &[Customer])
where
    S: CustomerStore + ?Sized,
{
    for customer in customers {
        store.add(customer.clone()).expect("store add");
    }
}

pub fn measure_text_search<S>(store: &S, term: &str) -> usize
where
    S: CustomerStore + ?Sized,
{
    store.find_by_text(term).len()
}

/// Deletes the first live customer, forcing a full-length compaction.
pub fn delete_front<S>(store: &S) -> bool
where
    S: CustomerStore + ?Sized,
{
    match store.all().first() {
        Some(first) => store.delete(first.id()),
        None => false,
    }
}
