//! Field-shape checks for teacher forms.
//!
//! The registry service assumes these already passed; the HTTP layer runs
//! them before calling it.

use crate::domain::DomainError;

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_VAT_DIGITS: usize = 9;

/// Accumulates every failing field so the caller can report them together
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: Vec<String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: &str) {
        self.errors.push(format!("{}: {}", field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<(), DomainError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self.errors.join("; ")))
        }
    }
}

/// Trimmed name with at least [`MIN_NAME_LEN`] characters
pub fn check_name(field: &str, value: Option<&str>, errors: &mut FieldErrors) -> String {
    let name = value.map(str::trim).unwrap_or_default();
    if name.is_empty() {
        errors.push(field, "is required");
    } else if name.chars().count() < MIN_NAME_LEN {
        errors.push(field, "must contain at least 2 characters");
    }
    name.to_string()
}

/// Digits only, at least [`MIN_VAT_DIGITS`] of them
pub fn is_valid_vat(vat: &str) -> bool {
    vat.len() >= MIN_VAT_DIGITS && vat.chars().all(|c| c.is_ascii_digit())
}

pub fn check_vat(value: Option<&str>, errors: &mut FieldErrors) -> String {
    let vat = value.map(str::trim).unwrap_or_default();
    if vat.is_empty() {
        errors.push("vat", "is required");
    } else if !is_valid_vat(vat) {
        errors.push("vat", "must contain at least 9 digits and nothing else");
    }
    vat.to_string()
}

pub fn check_region(value: Option<i32>, errors: &mut FieldErrors) -> i32 {
    match value {
        Some(id) => id,
        None => {
            errors.push("regionId", "is required");
            0
        }
    }
}
