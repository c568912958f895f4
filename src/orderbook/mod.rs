//! Order storage.
//!
//! ## Architecture
//!
//! - **Slab-based storage**: tree nodes live in a slab, linked by keys
//! - **AVL balancing**: height stays O(log n) whatever the insert order
//! - **Price-then-arrival order**: equal prices list in insertion order
//!
//! ## Components
//!
//! - [`TreeNode`]: an `OrderRecord` plus child links and cached height
//! - [`PriceTree`]: AVL tree for one side
//! - [`OrderBook`]: bid and ask trees with export/import
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Place order | O(log n) |
//! | List side | O(n) |
//! | Best bid/ask | O(log n) |
//! | Export / import | O(n) / O(n log n) |

pub mod node;
pub mod tree;
pub mod book;

pub use node::TreeNode;
pub use tree::{InOrder, PriceTree};
pub use book::OrderBook;
