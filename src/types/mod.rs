//! Core data types
//!
//! ## Types
//!
//! - [`OrderRecord`]: identifier, price and quantity of one resting order
//! - [`Side`]: Bid or Ask
//! - [`Price`]: signed fixed-point price key (scaled by 10^8)
//! - [`BookSnapshot`]: both sides as ordered listings, for persistence
//!
//! ## Fixed-Point Prices
//!
//! Prices are stored as `i64` scaled by 10^8.
//! Example: 101.5 is stored as 10_150_000_000i64

mod record;
mod snapshot;
pub mod price;

pub use price::Price;
pub use record::{OrderRecord, Side};
pub use snapshot::{state_root_hex, BookSnapshot};

pub(crate) use snapshot::compute_state_root;
