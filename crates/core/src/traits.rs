use crate::{
    errors::CoreError,
    model::{Customer, CustomerFields, CustomerId},
    query::SortKey,
};

/// Store contract consumed by adapters.
/// All methods take `&self`; implementations serialize access internally.
pub trait CustomerStore {
    /// Maximum number of live customers.
    fn capacity(&self) -> usize;

    /// Number of live customers.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a customer. Fails with `CapacityExceeded` when full, then
    /// `DuplicateId` when the id is already live.
    fn add(&self, customer: Customer) -> Result<(), CoreError>;

    fn find_by_id(&self, id: CustomerId) -> Option<Customer>;

    /// Case-insensitive substring search over name and code, in store order.
    /// An empty term returns no customers.
    fn find_by_text(&self, term: &str) -> Vec<Customer>;

    /// Replaces name, code and address of a live customer. Either every field
    /// is written or none is.
    fn update(&self, id: CustomerId, fields: &CustomerFields) -> Result<(), CoreError>;

    /// Removes a customer, keeping the relative order of the rest.
    /// Returns false when the id is not live.
    fn delete(&self, id: CustomerId) -> bool;

    /// Snapshot of live customers in store order.
    fn all(&self) -> Vec<Customer>;

    fn sorted_by_name(&self, ascending: bool) -> Vec<Customer>;

    fn sorted_by_id(&self, ascending: bool) -> Vec<Customer>;

    fn sorted(&self, key: SortKey, ascending: bool) -> Vec<Customer> {
        match key {
            SortKey::Id => self.sorted_by_id(ascending),
            SortKey::Name => self.sorted_by_name(ascending),
        }
    }
}
