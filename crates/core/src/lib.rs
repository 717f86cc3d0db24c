//! Core customer model, validation, query helpers and the store trait.
//! No IO within this crate.

pub mod errors;
pub mod model;
pub mod query;
pub mod seed;
pub mod traits;
pub mod validate;

pub use crate::errors::{CoreError, ValidationError};
pub use crate::model::{Customer, CustomerFields, CustomerId};
pub use crate::query::{filter_by_text, sort_customers, SortKey};
pub use crate::seed::{default_customers, seed_store};
pub use crate::traits::CustomerStore;
pub use crate::validate::{
    normalize_address, normalize_code, normalize_name, validate_id, MAX_ADDRESS_CHARS,
    MAX_CODE_CHARS, MAX_NAME_CHARS,
};

/// Record ceiling applied when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 500;
