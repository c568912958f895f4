//! Persistence for exported books.
//!
//! The book itself does no I/O. A store takes a [`BookSnapshot`] and writes it
//! somewhere durable, and hands it back on the next start.
//!
//! [`BookSnapshot`]: crate::types::BookSnapshot

mod json;

pub use json::{JsonStore, DEFAULT_STORE_PATH};
