//! Order record and side types.
//!
//! ## Persisted Shape
//!
//! Records serialize as `{"orderId": ..., "price": ..., "quantity": ...}`,
//! the shape the stored book document has always used.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Price;

// ============================================================================
// Side enum
// ============================================================================

/// Book side: Bid (buy) or Ask (sell)
///
/// Represented as u8 in the state root encoding:
/// - Bid = 0
/// - Ask = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Buy orders
    #[default]
    Bid,
    /// Sell orders
    Ask,
}

impl Side {
    /// Convert to u8 for encoding
    pub fn to_u8(self) -> u8 {
        match self {
            Side::Bid => 0,
            Side::Ask => 1,
        }
    }

    /// Convert from u8
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Side::Bid),
            1 => Some(Side::Ask),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Bid => "bid",
            Side::Ask => "ask",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// OrderRecord struct
// ============================================================================

/// A resting order as stored in one side of the book.
///
/// The book never validates or changes these fields after insert: the
/// identifier is whatever the caller supplied, and quantity is kept as given.
///
/// ## Example
///
/// ```
/// use price_tree::types::OrderRecord;
///
/// let record = OrderRecord::new("b1", "101.5".parse().unwrap(), 10);
/// assert_eq!(record.identifier, "b1");
/// assert_eq!(record.quantity, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Externally assigned identifier
    #[serde(rename = "orderId")]
    pub identifier: String,

    /// Sort key
    pub price: Price,

    /// Resting quantity
    pub quantity: u64,
}

impl OrderRecord {
    pub fn new(identifier: impl Into<String>, price: Price, quantity: u64) -> Self {
        Self {
            identifier: identifier.into(),
            price,
            quantity,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
