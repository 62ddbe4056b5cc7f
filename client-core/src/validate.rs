//! Field validation for client payloads.
//!
//! # Design
//! `validate` is the only way to turn a `ClientInput` into a
//! `ValidatedInput` (validate-then-construct). It is a pure function: no
//! mutation, no I/O, and it reports every failing field in a single pass
//! rather than stopping at the first one.

use crate::error::{FieldError, ValidationError};
use crate::types::{ClientInput, ValidatedInput};

/// Check every field constraint and wrap the input on success.
///
/// Rules:
/// - `name` must be non-empty.
/// - `phone` must be exactly 10 ASCII digits (no spaces, dashes, or
///   country code).
/// - `email` must look like `local@domain` with at least one dot in the
///   domain. Deliverability is not checked.
pub fn validate(input: ClientInput) -> Result<ValidatedInput, ValidationError> {
    let mut errors = Vec::new();

    if input.name.is_empty() {
        errors.push(FieldError {
            field: "name",
            message: "must not be empty".to_string(),
        });
    }

    if !is_valid_phone(&input.phone) {
        errors.push(FieldError {
            field: "phone",
            message: "must be exactly 10 digits".to_string(),
        });
    }

    if !is_valid_email(&input.email) {
        errors.push(FieldError {
            field: "email",
            message: "must be a valid email address".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(ValidatedInput(input))
    } else {
        Err(ValidationError::new(errors))
    }
}

fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}

fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // The domain needs at least one dot with non-empty labels on both sides.
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
