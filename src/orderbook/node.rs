//! Tree node for slab-based storage.
//!
//! ## Design
//!
//! `TreeNode` wraps an `OrderRecord` with the two child links of an AVL tree
//! and the cached height of the subtree rooted at it.
//!
//! ## Slab Integration
//!
//! Links are slab keys (`usize`), not references:
//! - Keys are returned by `slab.insert()` and stay valid for the tree's life
//! - Nodes are never removed, so keys are never reused
//! - Each key appears as a child of at most one node
//!
//! ## Height
//!
//! A leaf has height 1; an absent child counts as 0.

use crate::types::{OrderRecord, Price};

/// Node stored in the tree's slab.
///
/// ```text
/// TreeNode {
///     record: OrderRecord
///     left:   Option<usize>   lower prices
///     right:  Option<usize>   equal or higher prices
///     height: u32
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// The stored order
    pub record: OrderRecord,

    /// Left child (slab key), strictly lower prices at insert time
    pub left: Option<usize>,

    /// Right child (slab key), equal or higher prices at insert time
    pub right: Option<usize>,

    /// Height of the subtree rooted here
    pub height: u32,
}

impl TreeNode {
    /// Create an unlinked leaf
    ///
    /// ```
    /// use price_tree::orderbook::TreeNode;
    /// use price_tree::types::OrderRecord;
    ///
    /// let node = TreeNode::new(OrderRecord::new("b1", "101.5".parse().unwrap(), 10));
    ///
    /// assert!(node.is_leaf());
    /// assert_eq!(node.height, 1);
    /// ```
    #[inline]
    pub fn new(record: OrderRecord) -> Self {
        Self {
            record,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Check if this node has no children
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    #[inline]
    pub fn price(&self) -> Price {
        self.record.price
    }

    #[inline]
    pub fn identifier(&self) -> &str {
        &self.record.identifier
    }

    #[inline]
    pub fn quantity(&self) -> u64 {
        self.record.quantity
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
