use thiserror::Error;

use crate::model::CustomerId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid id {0}: must be a positive integer")]
    InvalidId(i64),
    #[error("invalid name: {0}")]
    InvalidName(String),
    #[error("invalid code: {0}")]
    InvalidCode(String),
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("customer id {0} already exists")]
    DuplicateId(CustomerId),
    #[error("maximum customer limit reached ({0})")]
    CapacityExceeded(usize),
    #[error("customer {0} not found")]
    NotFound(CustomerId),
}
