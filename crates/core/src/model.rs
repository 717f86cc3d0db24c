use serde::Serialize;

use crate::{
    errors::ValidationError,
    validate::{normalize_address, normalize_code, normalize_name, validate_id},
};

pub type CustomerId = i64;

/// Raw field values for a create or update, before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerFields {
    pub name: String,
    pub code: String,
    pub address: Option<String>,
}

impl CustomerFields {
    pub fn new(name: &str, code: &str, address: Option<&str>) -> Self {
        Self {
            name: name.to_owned(),
            code: code.to_owned(),
            address: address.map(str::to_owned),
        }
    }
}

/// A validated customer record. Fields are private so every value held here
/// has passed the rules in [`crate::validate`].
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    name: String,
    code: String,
    address: Option<String>,
}

struct Normalized {
    name: String,
    code: String,
    address: Option<String>,
}

fn normalize(fields: &CustomerFields) -> Result<Normalized, ValidationError> {
    Ok(Normalized {
        name: normalize_name(&fields.name)?,
        code: normalize_code(&fields.code)?,
        address: normalize_address(fields.address.as_deref())?,
    })
}

impl Customer {
    /// Validates in the order id, name, code, address and reports the first failure.
    pub fn new(
        id: i64,
        name: &str,
        code: &str,
        address: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Self::from_fields(id, &CustomerFields::new(name, code, address))
    }

    pub fn from_fields(id: i64, fields: &CustomerFields) -> Result<Self, ValidationError> {
        let id = validate_id(id)?;
        let Normalized {
            name,
            code,
            address,
        } = normalize(fields)?;
        Ok(Self {
            id,
            name,
            code,
            address,
        })
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = normalize_name(name)?;
        Ok(())
    }

    pub fn set_code(&mut self, code: &str) -> Result<(), ValidationError> {
        self.code = normalize_code(code)?;
        Ok(())
    }

    pub fn set_address(&mut self, address: Option<&str>) -> Result<(), ValidationError> {
        self.address = normalize_address(address)?;
        Ok(())
    }

    /// Replaces name, code and address together. Nothing is written unless all
    /// three values are valid.
    pub fn replace_fields(&mut self, fields: &CustomerFields) -> Result<(), ValidationError> {
        let next = normalize(fields)?;
        self.name = next.name;
        self.code = next.code;
        self.address = next.address;
        Ok(())
    }
}
