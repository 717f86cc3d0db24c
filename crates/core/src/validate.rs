use std::sync::OnceLock;

use crate::{errors::ValidationError, model::CustomerId};
use regex::Regex;

pub const MAX_NAME_CHARS: usize = 50;
pub const MAX_CODE_CHARS: usize = 10;
pub const MAX_ADDRESS_CHARS: usize = 200;

fn code_charset() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // The regex crate has no lookahead; letter/digit presence is checked separately.
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9]{1,10}$").expect("valid regex"))
}

pub fn validate_id(id: i64) -> Result<CustomerId, ValidationError> {
    if id > 0 {
        Ok(id)
    } else {
        Err(ValidationError::InvalidId(id))
    }
}

/// Trims surrounding whitespace and enforces 1..=50 characters.
pub fn normalize_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::InvalidName("name is required".into()));
    }
    let len = name.chars().count();
    if len > MAX_NAME_CHARS {
        return Err(ValidationError::InvalidName(format!(
            "{len} characters exceeds the limit of {MAX_NAME_CHARS}"
        )));
    }
    Ok(name.to_owned())
}

/// Codes are 1..=10 ASCII alphanumerics containing at least one letter and one digit.
pub fn normalize_code(raw: &str) -> Result<String, ValidationError> {
    let code = raw.trim();
    if code.is_empty() {
        return Err(ValidationError::InvalidCode("code is required".into()));
    }
    if code.chars().count() > MAX_CODE_CHARS {
        return Err(ValidationError::InvalidCode(format!(
            "must not exceed {MAX_CODE_CHARS} characters"
        )));
    }
    if !code_charset().is_match(code) {
        return Err(ValidationError::InvalidCode(
            "only ASCII letters and digits are allowed".into(),
        ));
    }
    let has_letter = code.bytes().any(|b| b.is_ascii_alphabetic());
    let has_digit = code.bytes().any(|b| b.is_ascii_digit());
    if !(has_letter && has_digit) {
        return Err(ValidationError::InvalidCode(
            "must contain at least one letter and one digit".into(),
        ));
    }
    Ok(code.to_owned())
}

/// Blank input maps to `None`; anything else is trimmed and capped at 200 characters.
pub fn normalize_address(raw: Option<&str>) -> Result<Option<String>, ValidationError> {
    let Some(address) = raw.map(str::trim).filter(|a| !a.is_empty()) else {
        return Ok(None);
    };
    let len = address.chars().count();
    if len > MAX_ADDRESS_CHARS {
        return Err(ValidationError::InvalidAddress(format!(
            "{len} characters exceeds the limit of {MAX_ADDRESS_CHARS}"
        )));
    }
    Ok(Some(address.to_owned()))
}
