//! Domain types for the client resource.
//!
//! # Design
//! `Client` is the stored entity; `ClientInput` is the payload shape shared
//! by create and full-replacement update (no id, no optional fields).
//! `ValidatedInput` wraps a `ClientInput` that has passed every field
//! constraint — its field is not public, so the only way to obtain one is
//! through [`crate::validate::validate`]. The store accepts only
//! `ValidatedInput`, which is why its operations never fail on field data.

use serde::{Deserialize, Serialize};

/// A client record as stored and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Client {
    /// Auto-increment identifier, assigned by the store. Always >= 1.
    pub id: u64,
    pub name: String,
    /// Exactly 10 ASCII decimal digits.
    pub phone: String,
    pub email: String,
}

/// Request payload for creating or fully replacing a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInput {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// A `ClientInput` that has passed validation.
///
/// Constructed only by [`crate::validate::validate`].
#[derive(Debug, Clone)]
pub struct ValidatedInput(pub(crate) ClientInput);

impl ValidatedInput {
    /// The validated payload fields.
    pub fn as_input(&self) -> &ClientInput {
        &self.0
    }

    pub(crate) fn into_input(self) -> ClientInput {
        self.0
    }
}
