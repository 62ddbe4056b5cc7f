//! Error types for the client domain.
//!
//! # Design
//! Exactly two error kinds exist in the core. `ValidationError` is produced
//! before anything reaches the store and lists every failing field, so the
//! HTTP layer can render per-field detail in one response. `NotFound` is the
//! store's only failure mode. Both represent expected client input
//! conditions, not server faults.

use std::fmt;

use serde::Serialize;

/// A single field that failed validation, with the constraint it violated.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Payload validation failed for one or more fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub(crate) fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// Every failing field, in declaration order (name, phone, email).
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed for ")?;
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", err.field, err.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// No client exists for the requested id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFound;

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "client not found")
    }
}

impl std::error::Error for NotFound {}
