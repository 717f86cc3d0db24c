use custledger_core::{
    filter_by_text, sort_customers, Customer, CoreError, CustomerFields, CustomerId,
    CustomerStore, SortKey, DEFAULT_CAPACITY,
};
use parking_lot::RwLock;
use tracing::{debug, warn};

/// Process-lifetime customer store. Customers are kept in insertion order in
/// a growable vector; the capacity is a contractual ceiling, not an
/// allocation size.
pub struct EphemeralStore {
    customers: RwLock<Vec<Customer>>,
    capacity: usize,
}

impl EphemeralStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            customers: RwLock::new(Vec::new()),
            capacity,
        }
    }

    fn sorted_snapshot(&self, key: SortKey, ascending: bool) -> Vec<Customer> {
        let mut snapshot = self.all();
        sort_customers(&mut snapshot, key, ascending);
        snapshot
    }
}

impl Default for EphemeralStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl CustomerStore for EphemeralStore {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.customers.read().len()
    }

    fn add(&self, customer: Customer) -> Result<(), CoreError> {
        let mut customers = self.customers.write();
        if customers.len() >= self.capacity {
            warn!(capacity = self.capacity, "customer rejected: store is full");
            return Err(CoreError::CapacityExceeded(self.capacity));
        }
        let id = customer.id();
        if customers.iter().any(|c| c.id() == id) {
            debug!(customer_id = id, "customer rejected: duplicate id");
            return Err(CoreError::DuplicateId(id));
        }
        customers.push(customer);
        debug!(customer_id = id, count = customers.len(), "customer added");
        Ok(())
    }

    fn find_by_id(&self, id: CustomerId) -> Option<Customer> {
        self.customers.read().iter().find(|c| c.id() == id).cloned()
    }

    fn find_by_text(&self, term: &str) -> Vec<Customer> {
        filter_by_text(self.customers.read().iter(), term)
    }

    fn update(&self, id: CustomerId, fields: &CustomerFields) -> Result<(), CoreError> {
        let mut customers = self.customers.write();
        let customer = customers
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or(CoreError::NotFound(id))?;
        customer.replace_fields(fields)?;
        debug!(customer_id = id, "customer updated");
        Ok(())
    }

    fn delete(&self, id: CustomerId) -> bool {
        let mut customers = self.customers.write();
        match customers.iter().position(|c| c.id() == id) {
            Some(index) => {
                // Vec::remove shifts the tail left, so survivors keep their order.
                customers.remove(index);
                debug!(customer_id = id, count = customers.len(), "customer deleted");
                true
            }
            None => false,
        }
    }

    fn all(&self) -> Vec<Customer> {
        self.customers.read().clone()
    }

    fn sorted_by_name(&self, ascending: bool) -> Vec<Customer> {
        self.sorted_snapshot(SortKey::Name, ascending)
    }

    fn sorted_by_id(&self, ascending: bool) -> Vec<Customer> {
        self.sorted_snapshot(SortKey::Id, ascending)
    }
}
