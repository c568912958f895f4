//! Error types.
//!
//! The tree and book operations themselves are total and never return these.
//! Errors only arise at the edges: parsing prices, reading and writing the
//! persisted book, and invariant diagnostics.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn external input into a [`Price`](crate::types::Price).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    /// Input is not a decimal number
    #[error("invalid price {input:?}: {reason}")]
    Parse { input: String, reason: String },

    /// Input is a number but does not fit the fixed-point range
    #[error("price {0} is out of range")]
    OutOfRange(String),
}

/// Failure in the persistence or CLI layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed order book document in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode order book: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("console I/O failed: {0}")]
    Console(#[from] std::io::Error),

    #[error(transparent)]
    Price(#[from] PriceError),

    #[error("invalid quantity {0:?}: expected a non-negative integer")]
    Quantity(String),
}

/// First broken structural invariant found by
/// [`PriceTree::verify`](crate::orderbook::PriceTree::verify).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("node {key} has balance factor {balance}")]
    Unbalanced { key: usize, balance: i64 },

    #[error("node {key} caches height {cached} but its subtrees give {actual}")]
    StaleHeight { key: usize, cached: u32, actual: u32 },

    #[error("in-order listing decreases at position {position}")]
    OutOfOrder { position: usize },

    #[error("tree reports {reported} nodes but {reachable} are reachable from the root")]
    LostNodes { reported: usize, reachable: usize },
}
