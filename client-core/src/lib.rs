//! Domain core for the client CRUD service.
//!
//! # Overview
//! Holds everything the HTTP layer does not: the client entity types, the
//! field validator, and the in-memory store with its auto-increment id
//! allocation. The crate is fully synchronous and does no I/O, so every
//! contract here is testable without a server.
//!
//! # Design
//! - `validate` is the only constructor for `ValidatedInput`; the store
//!   accepts nothing else, so store operations never fail on field data.
//! - `ClientStore` owns both the collection and the id counter; callers
//!   wrap the whole struct in one lock so id allocation and insertion stay
//!   a single atomic step.
//! - The only errors are `ValidationError` and `NotFound` — both expected
//!   client conditions, surfaced to the boundary as-is.

pub mod error;
pub mod store;
pub mod types;
pub mod validate;

pub use error::{FieldError, NotFound, ValidationError};
pub use store::ClientStore;
pub use types::{Client, ClientInput, ValidatedInput};
pub use validate::validate;
