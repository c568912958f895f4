//! # Price Tree
//!
//! Price-ordered order storage: one AVL tree per trading side.
//!
//! ## Architecture
//!
//! - **Types**: Core data structures (OrderRecord, Side, Price, BookSnapshot)
//! - **OrderBook**: Bid and ask trees with slab-backed nodes
//! - **Store**: JSON file persistence for exported books
//! - **Cli**: Session, menu loop and command dispatch for the binary
//!
//! ## Design Principles
//!
//! 1. **Bounded height**: AVL rebalancing on every insert, whatever the order
//! 2. **No Floating Point**: Prices are fixed-point (10^8 scaling)
//! 3. **Stable ties**: Equal prices list in insertion order
//! 4. **No I/O in the core**: The book only exports and imports listings
//!
//! ## Example
//!
//! ```
//! use price_tree::{OrderBook, Side};
//!
//! let mut book = OrderBook::new();
//! book.place(Side::Ask, "102".parse().unwrap(), 4, "a1");
//!
//! let rebuilt = OrderBook::import(&book.export());
//! assert_eq!(rebuilt.list(Side::Ask), book.list(Side::Ask));
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: OrderRecord, Side, Price, BookSnapshot
pub mod types;

/// Order storage: AVL trees and the two-sided book
pub mod orderbook;

/// Persistence for exported books
pub mod store;

/// Command-line front end
pub mod cli;

/// Error types
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::{InvariantViolation, PriceError, StoreError};
pub use orderbook::{OrderBook, PriceTree, TreeNode};
pub use store::JsonStore;
pub use types::{BookSnapshot, OrderRecord, Price, Side};
