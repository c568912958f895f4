//! A book bound to its store.
//!
//! Every placement is followed by a save, so the file always reflects the
//! latest book. The book is rebuilt from the file when the session opens.

use tracing::info;

use crate::cli::new_order_id;
use crate::error::StoreError;
use crate::orderbook::OrderBook;
use crate::store::JsonStore;
use crate::types::{OrderRecord, Price, Side};

/// Order book plus the store it is persisted to.
#[derive(Debug)]
pub struct Session {
    book: OrderBook,
    store: JsonStore,
}

impl Session {
    /// Load the saved book from `store`, or start empty
    pub fn open(store: JsonStore) -> Result<Self, StoreError> {
        let book = match store.load()? {
            Some(snapshot) => OrderBook::import(&snapshot),
            None => OrderBook::new(),
        };
        Ok(Self { book, store })
    }

    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    /// Place an order with a fresh identifier and save the book
    pub fn place(&mut self, side: Side, price: Price, quantity: u64) -> Result<OrderRecord, StoreError> {
        let record = OrderRecord::new(new_order_id(), price, quantity);
        self.book.place_record(side, record.clone());
        self.store.save(&self.book.export())?;
        info!(%side, id = record.identifier.as_str(), %price, quantity, "order placed");
        Ok(record)
    }

    /// Text view of both sides
    pub fn render(&self) -> String {
        let mut out = String::from("\n===== ORDER BOOK =====\n");
        for (title, side) in [("Buy Orders:", Side::Bid), ("Sell Orders:", Side::Ask)] {
            out.push_str(title);
            out.push('\n');
            for record in self.book.tree(side) {
                out.push_str(&format!(
                    "ID: {}, Price: {}, Quantity: {}\n",
                    record.identifier, record.price, record.quantity
                ));
            }
        }
        out
    }
}

/// Confirmation line printed after a placement
pub fn placed_message(side: Side, record: &OrderRecord) -> String {
    let label = match side {
        Side::Bid => "Buy",
        Side::Ask => "Sell",
    };
    format!(
        "{} Order Placed: ID {}, Price {}, Quantity {}",
        label, record.identifier, record.price, record.quantity
    )
}

// ============================================================================
// Unit Tests
// ============================================================================
