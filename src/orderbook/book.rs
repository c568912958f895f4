//! Two-sided order book.
//!
//! ## Architecture
//!
//! The book is two independent [`PriceTree`]s:
//!
//! - **Bids**: buy orders
//! - **Asks**: sell orders
//!
//! Nothing relates one side to the other. Orders are stored and listed, never
//! matched.
//!
//! ## Persistence Hand-off
//!
//! [`OrderBook::export`] returns both sides as ascending-price listings;
//! [`OrderBook::import`] rebuilds a book by replaying such listings through
//! [`OrderBook::place`] in listed order. Equal-price records therefore come
//! back in listing order. Their original arrival order is not part of the
//! export, so it cannot be restored.
//!
//! ## Example
//!
//! ```
//! use price_tree::orderbook::OrderBook;
//! use price_tree::types::Side;
//!
//! let mut book = OrderBook::new();
//! book.place(Side::Bid, "101.5".parse().unwrap(), 10, "b1");
//! book.place(Side::Bid, "99.0".parse().unwrap(), 5, "b2");
//! book.place(Side::Bid, "101.5".parse().unwrap(), 3, "b3");
//!
//! let ids: Vec<_> = book.list(Side::Bid).into_iter().map(|r| r.identifier).collect();
//! assert_eq!(ids, ["b2", "b1", "b3"]);
//! ```

use tracing::{debug, trace};

use crate::orderbook::PriceTree;
use crate::types::{compute_state_root, BookSnapshot, OrderRecord, Price, Side};

/// Order book holding one price tree per side.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    /// Buy orders
    bids: PriceTree,

    /// Sell orders
    asks: PriceTree,
}

impl OrderBook {
    /// Create a new empty book
    pub fn new() -> Self {
        Self {
            bids: PriceTree::new(),
            asks: PriceTree::new(),
        }
    }

    /// Create a book with `per_side` node slots reserved on each side
    pub fn with_capacity(per_side: usize) -> Self {
        Self {
            bids: PriceTree::with_capacity(per_side),
            asks: PriceTree::with_capacity(per_side),
        }
    }

    /// Rebuild a book from an exported snapshot
    pub fn import(snapshot: &BookSnapshot) -> Self {
        let mut book = Self::with_capacity(snapshot.bids.len().max(snapshot.asks.len()));
        book.replay(snapshot);
        book
    }

    // ========================================================================
    // Size
    // ========================================================================

    #[inline]
    pub fn bid_count(&self) -> usize {
        self.bids.len()
    }

    #[inline]
    pub fn ask_count(&self) -> usize {
        self.asks.len()
    }

    /// Total records on both sides
    #[inline]
    pub fn order_count(&self) -> usize {
        self.bids.len() + self.asks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// The tree backing one side
    #[inline]
    pub fn tree(&self, side: Side) -> &PriceTree {
        match side {
            Side::Bid => &self.bids,
            Side::Ask => &self.asks,
        }
    }

    fn tree_mut(&mut self, side: Side) -> &mut PriceTree {
        match side {
            Side::Bid => &mut self.bids,
            Side::Ask => &mut self.asks,
        }
    }

    // ========================================================================
    // Write
    // ========================================================================

    /// Store an order on one side. Always succeeds; the identifier is taken
    /// as given.
    pub fn place(&mut self, side: Side, price: Price, quantity: u64, identifier: impl Into<String>) {
        let identifier = identifier.into();
        trace!(%side, %price, quantity, identifier = identifier.as_str(), "place");
        self.tree_mut(side).insert(price, quantity, identifier);
    }

    /// Store an already-built record on one side
    pub fn place_record(&mut self, side: Side, record: OrderRecord) {
        trace!(%side, price = %record.price, quantity = record.quantity, "place");
        self.tree_mut(side).insert_record(record);
    }

    /// Replay a snapshot into this book, each side in listed order
    pub fn replay(&mut self, snapshot: &BookSnapshot) {
        for (side, records) in [(Side::Bid, &snapshot.bids), (Side::Ask, &snapshot.asks)] {
            for record in records {
                self.place_record(side, record.clone());
            }
        }
        debug!(
            bids = snapshot.bids.len(),
            asks = snapshot.asks.len(),
            "replayed snapshot"
        );
    }

    // ========================================================================
    // Read
    // ========================================================================

    /// In-order listing of one side (ascending price)
    pub fn list(&self, side: Side) -> Vec<OrderRecord> {
        self.tree(side).inorder()
    }

    /// Both sides as listings, for persistence
    pub fn export(&self) -> BookSnapshot {
        let snapshot = BookSnapshot::new(self.list(Side::Bid), self.list(Side::Ask));
        debug!(bids = snapshot.bids.len(), asks = snapshot.asks.len(), "exported book");
        snapshot
    }

    /// Highest bid price
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.last().map(|r| r.price)
    }

    /// Lowest ask price
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.first().map(|r| r.price)
    }

    /// SHA-256 over both listings; equal listings give equal roots
    pub fn state_root(&self) -> [u8; 32] {
        compute_state_root(self.bids.iter(), self.asks.iter())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn price(s: &str) -> Price {
        s.parse().unwrap()
    }

    fn ids(records: &[OrderRecord]) -> Vec<&str> {
        records.iter().map(|r| r.identifier.as_str()).collect()
    }

    #[test]
    fn test_book_new() {
        let book = OrderBook::new();

        assert!(book.is_empty());
        assert_eq!(book.order_count(), 0);
        assert!(book.list(Side::Bid).is_empty());
        assert!(book.list(Side::Ask).is_empty());
        assert_eq!(book.best_bid(), None);
        assert_eq!(book.best_ask(), None);
    }

    #[test]
    fn test_book_example_scenario() {
        let mut book = OrderBook::new();
        book.place(Side::Bid, price("101.5"), 10, "b1");
        book.place(Side::Bid, price("99.0"), 5, "b2");
        book.place(Side::Bid, price("101.5"), 3, "b3");

        let expected = vec![
            OrderRecord::new("b2", price("99.0"), 5),
            OrderRecord::new("b1", price("101.5"), 10),
            OrderRecord::new("b3", price("101.5"), 3),
        ];
        assert_eq!(book.list(Side::Bid), expected);
        assert!(book.list(Side::Ask).is_empty());
    }

    #[test]
    fn test_book_sides_independent() {
        let mut book = OrderBook::new();
        book.place(Side::Bid, price("100"), 1, "b");
        book.place(Side::Ask, price("90"), 1, "a");

        assert_eq!(book.bid_count(), 1);
        assert_eq!(book.ask_count(), 1);
        assert_eq!(ids(&book.list(Side::Bid)), ["b"]);
        assert_eq!(ids(&book.list(Side::Ask)), ["a"]);
        // A crossed book is stored as-is
        assert_eq!(book.best_bid(), Some(price("100")));
        assert_eq!(book.best_ask(), Some(price("90")));
    }

    #[test]
    fn test_book_best_prices() {
        let mut book = OrderBook::new();
        for (p, id) in [("99", "b1"), ("101", "b2"), ("100", "b3")] {
            book.place(Side::Bid, price(p), 1, id);
        }
        for (p, id) in [("105", "a1"), ("103", "a2"), ("104", "a3")] {
            book.place(Side::Ask, price(p), 1, id);
        }

        assert_eq!(book.best_bid(), Some(price("101")));
        assert_eq!(book.best_ask(), Some(price("103")));
    }

    #[test]
    fn test_book_export_import() {
        let mut book = OrderBook::new();
        book.place(Side::Bid, price("10"), 1, "b1");
        book.place(Side::Bid, price("9"), 2, "b2");
        book.place(Side::Ask, price("11"), 3, "a1");

        let snapshot = book.export();
        assert_eq!(ids(&snapshot.bids), ["b2", "b1"]);
        assert_eq!(ids(&snapshot.asks), ["a1"]);

        let rebuilt = OrderBook::import(&snapshot);
        assert_eq!(rebuilt.export(), snapshot);
        assert_eq!(rebuilt.state_root(), book.state_root());
    }

    #[test]
    fn test_book_import_follows_listing_order() {
        // Listing order, not arrival order, decides ties after a round trip
        let snapshot = BookSnapshot::new(
            vec![
                OrderRecord::new("late", price("5"), 1),
                OrderRecord::new("early", price("5"), 1),
            ],
            vec![],
        );

        let book = OrderBook::import(&snapshot);
        assert_eq!(ids(&book.list(Side::Bid)), ["late", "early"]);
    }

    #[test]
    fn test_book_replay_appends() {
        let mut book = OrderBook::new();
        book.place(Side::Ask, price("1"), 1, "a1");

        let snapshot = BookSnapshot::new(vec![], vec![OrderRecord::new("a0", price("1"), 1)]);
        book.replay(&snapshot);

        assert_eq!(ids(&book.list(Side::Ask)), ["a1", "a0"]);
    }

    #[test]
    fn test_book_keeps_duplicate_identifiers() {
        let mut book = OrderBook::new();
        book.place(Side::Bid, price("1"), 1, "dup");
        book.place(Side::Bid, price("2"), 1, "dup");
        book.place(Side::Bid, price("3"), 0, "");

        assert_eq!(ids(&book.list(Side::Bid)), ["dup", "dup", ""]);
    }

    #[test]
    fn test_state_root_matches_snapshot() {
        let mut book = OrderBook::new();
        book.place(Side::Bid, price("1"), 1, "b");
        book.place(Side::Ask, price("2"), 1, "a");

        assert_eq!(book.state_root(), book.export().state_root());
        assert_ne!(book.state_root(), OrderBook::new().state_root());
    }
}
