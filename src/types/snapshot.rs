//! Exported book listings and state roots.
//!
//! A [`BookSnapshot`] is what the book hands to a persistence collaborator:
//! both sides as plain ascending-price listings. There is no version field or
//! checksum in the document itself.
//!
//! ## State Root
//!
//! The 32-byte state root is a SHA-256 hash over a canonical encoding of both
//! listings. Two books with identical listings have identical roots, which
//! makes it a cheap equality check across export/import cycles.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::types::{OrderRecord, Side};

/// Both sides of the book as ordered listings.
///
/// ```
/// use price_tree::types::BookSnapshot;
///
/// let snapshot = BookSnapshot::from_json(r#"{"buyOrders": [], "sellOrders": []}"#).unwrap();
/// assert!(snapshot.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookSnapshot {
    /// Bid side, ascending by price
    #[serde(rename = "buyOrders")]
    pub bids: Vec<OrderRecord>,

    /// Ask side, ascending by price
    #[serde(rename = "sellOrders")]
    pub asks: Vec<OrderRecord>,
}

impl BookSnapshot {
    pub fn new(bids: Vec<OrderRecord>, asks: Vec<OrderRecord>) -> Self {
        Self { bids, asks }
    }

    /// Listing for one side
    pub fn side(&self, side: Side) -> &[OrderRecord] {
        match side {
            Side::Bid => &self.bids,
            Side::Ask => &self.asks,
        }
    }

    /// Total number of records on both sides
    pub fn len(&self) -> usize {
        self.bids.len() + self.asks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Pretty-printed JSON document
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }

    /// SHA-256 state root of both listings
    pub fn state_root(&self) -> [u8; 32] {
        compute_state_root(self.bids.iter(), self.asks.iter())
    }
}

/// Hash two ordered listings into a state root.
///
/// Encoding per record: side byte, identifier length (u64 LE), identifier
/// bytes, raw price (i64 LE), quantity (u64 LE).
pub(crate) fn compute_state_root<'a>(
    bids: impl Iterator<Item = &'a OrderRecord>,
    asks: impl Iterator<Item = &'a OrderRecord>,
) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hash_side(&mut hasher, Side::Bid, bids);
    hash_side(&mut hasher, Side::Ask, asks);
    let result = hasher.finalize();

    let mut root = [0u8; 32];
    root.copy_from_slice(&result);
    root
}

/// Get a state root as a hex string
pub fn state_root_hex(root: &[u8; 32]) -> String {
    hex::encode(root)
}

fn hash_side<'a>(hasher: &mut Sha256, side: Side, records: impl Iterator<Item = &'a OrderRecord>) {
    let mut count: u64 = 0;
    for record in records {
        hasher.update([side.to_u8()]);
        hasher.update((record.identifier.len() as u64).to_le_bytes());
        hasher.update(record.identifier.as_bytes());
        hasher.update(record.price.raw().to_le_bytes());
        hasher.update(record.quantity.to_le_bytes());
        count += 1;
    }
    // Side terminator keeps an empty bid side distinct from an empty ask side.
    hasher.update([0xff, side.to_u8()]);
    hasher.update(count.to_le_bytes());
}

// ============================================================================
// Unit Tests
// ============================================================================
