//! AVL tree of orders keyed by price.
//!
//! ## Structure
//!
//! Nodes live in a [`Slab`]; links between them are slab keys. The tree owns
//! the slab and the key of its root. Every recursive step that can restructure
//! a subtree returns the key of the subtree's (possibly new) root, and the
//! caller stores it back into the parent link or `root`.
//!
//! ## Ordering
//!
//! - `price < node.price` goes left
//! - anything else (equal or greater) goes right
//!
//! A new record therefore lands after every existing record with the same
//! price, so an in-order listing keeps equal prices in insertion order.
//! Rotations preserve the in-order sequence, so this holds across rebalancing.
//!
//! ## Balance
//!
//! After each insert, every node on the insertion path is rebalanced bottom-up
//! so that `|height(left) - height(right)| <= 1` holds everywhere.
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Insert | O(log n) |
//! | In-order listing | O(n) |
//! | First / last | O(log n) |
//!
//! ## Example
//!
//! ```
//! use price_tree::orderbook::PriceTree;
//!
//! let mut tree = PriceTree::new();
//! for (i, price) in ["3", "1", "2"].into_iter().enumerate() {
//!     tree.insert(price.parse().unwrap(), 1, format!("o{i}"));
//! }
//!
//! let ids: Vec<_> = tree.iter().map(|r| r.identifier.as_str()).collect();
//! assert_eq!(ids, ["o1", "o2", "o0"]);
//! assert_eq!(tree.height(), 2);
//! ```

use slab::Slab;
use tracing::trace;

use crate::error::InvariantViolation;
use crate::orderbook::TreeNode;
use crate::types::{OrderRecord, Price};

/// Self-balancing binary search tree holding one side of the book.
#[derive(Debug, Clone, Default)]
pub struct PriceTree {
    /// Node storage
    /// Key: slab index, Value: TreeNode
    nodes: Slab<TreeNode>,

    /// Key of the root node, None when empty
    root: Option<usize>,
}

impl PriceTree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            root: None,
        }
    }

    /// Create a tree with room for `capacity` nodes before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            root: None,
        }
    }

    // ========================================================================
    // Size and Shape
    // ========================================================================

    /// Number of stored records
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree (0 when empty)
    #[inline]
    pub fn height(&self) -> u32 {
        self.height_of(self.root)
    }

    /// Key of the root node
    #[inline]
    pub fn root_key(&self) -> Option<usize> {
        self.root
    }

    /// Look up a node by slab key
    #[inline]
    pub fn node(&self, key: usize) -> Option<&TreeNode> {
        self.nodes.get(key)
    }

    // ========================================================================
    // Insert
    // ========================================================================

    /// Insert a record. Never fails; duplicates of price or identifier are
    /// stored as separate records.
    pub fn insert(&mut self, price: Price, quantity: u64, identifier: impl Into<String>) {
        self.insert_record(OrderRecord::new(identifier, price, quantity));
    }

    /// Insert an already-built record
    pub fn insert_record(&mut self, record: OrderRecord) {
        let price = record.price;
        let key = self.nodes.insert(TreeNode::new(record));
        let root = self.insert_at(self.root, key, price);
        self.root = Some(root);
        trace!(key, %price, height = self.height(), "inserted");
    }

    /// Place `key` in the subtree rooted at `node` and return the subtree's
    /// new root.
    fn insert_at(&mut self, node: Option<usize>, key: usize, price: Price) -> usize {
        let Some(current) = node else {
            return key;
        };

        if price < self.nodes[current].price() {
            let left = self.nodes[current].left;
            let new_left = self.insert_at(left, key, price);
            self.nodes[current].left = Some(new_left);
        } else {
            let right = self.nodes[current].right;
            let new_right = self.insert_at(right, key, price);
            self.nodes[current].right = Some(new_right);
        }

        self.rebalance(current)
    }

    // ========================================================================
    // Rebalancing
    // ========================================================================

    #[inline]
    fn height_of(&self, node: Option<usize>) -> u32 {
        node.map_or(0, |key| self.nodes[key].height)
    }

    /// `height(left) - height(right)` at `key`
    #[inline]
    fn balance_factor(&self, key: usize) -> i64 {
        let node = &self.nodes[key];
        i64::from(self.height_of(node.left)) - i64::from(self.height_of(node.right))
    }

    #[inline]
    fn update_height(&mut self, key: usize) {
        let node = &self.nodes[key];
        let height = 1 + self.height_of(node.left).max(self.height_of(node.right));
        self.nodes[key].height = height;
    }

    /// Restore the AVL condition at `key` and return the subtree's new root.
    fn rebalance(&mut self, key: usize) -> usize {
        self.update_height(key);
        let balance = self.balance_factor(key);

        if balance > 1 {
            let Some(left) = self.nodes[key].left else {
                return key;
            };
            if self.balance_factor(left) < 0 {
                let new_left = self.rotate_left(left);
                self.nodes[key].left = Some(new_left);
            }
            return self.rotate_right(key);
        }

        if balance < -1 {
            let Some(right) = self.nodes[key].right else {
                return key;
            };
            if self.balance_factor(right) > 0 {
                let new_right = self.rotate_right(right);
                self.nodes[key].right = Some(new_right);
            }
            return self.rotate_left(key);
        }

        key
    }

    /// ```text
    ///       y            x
    ///      / \          / \
    ///     x   C  ==>   A   y
    ///    / \              / \
    ///   A   B            B   C
    /// ```
    fn rotate_right(&mut self, y: usize) -> usize {
        let Some(x) = self.nodes[y].left else {
            return y;
        };
        let b = self.nodes[x].right;

        self.nodes[x].right = Some(y);
        self.nodes[y].left = b;

        // y is now below x
        self.update_height(y);
        self.update_height(x);
        trace!(from = y, to = x, "rotate right");
        x
    }

    /// Mirror of [`rotate_right`](Self::rotate_right).
    fn rotate_left(&mut self, x: usize) -> usize {
        let Some(y) = self.nodes[x].right else {
            return x;
        };
        let b = self.nodes[y].left;

        self.nodes[y].left = Some(x);
        self.nodes[x].right = b;

        self.update_height(x);
        self.update_height(y);
        trace!(from = x, to = y, "rotate left");
        y
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Borrowing in-order iterator (ascending price, insertion order on ties)
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(self)
    }

    /// Materialized in-order listing
    pub fn inorder(&self) -> Vec<OrderRecord> {
        self.iter().cloned().collect()
    }

    /// Lowest-priced record; the earliest inserted among equal lowest prices
    pub fn first(&self) -> Option<&OrderRecord> {
        let mut key = self.root?;
        while let Some(left) = self.nodes[key].left {
            key = left;
        }
        Some(&self.nodes[key].record)
    }

    /// Highest-priced record; the latest inserted among equal highest prices
    pub fn last(&self) -> Option<&OrderRecord> {
        let mut key = self.root?;
        while let Some(right) = self.nodes[key].right {
            key = right;
        }
        Some(&self.nodes[key].record)
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    /// Check every structural invariant and report the first one broken.
    ///
    /// Walks the whole tree, so this is O(n).
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        let mut reachable = 0;
        let mut stack: Vec<usize> = self.root.into_iter().collect();
        while let Some(key) = stack.pop() {
            reachable += 1;
            let node = &self.nodes[key];

            let actual = 1 + self.height_of(node.left).max(self.height_of(node.right));
            if node.height != actual {
                return Err(InvariantViolation::StaleHeight {
                    key,
                    cached: node.height,
                    actual,
                });
            }

            let balance = self.balance_factor(key);
            if balance.abs() > 1 {
                return Err(InvariantViolation::Unbalanced { key, balance });
            }

            stack.extend(node.left);
            stack.extend(node.right);
        }

        if reachable != self.len() {
            return Err(InvariantViolation::LostNodes {
                reported: self.len(),
                reachable,
            });
        }

        let mut previous: Option<Price> = None;
        for (position, record) in self.iter().enumerate() {
            if previous.is_some_and(|p| record.price < p) {
                return Err(InvariantViolation::OutOfOrder { position });
            }
            previous = Some(record.price);
        }

        Ok(())
    }
}

// ============================================================================
// In-order iterator
// ============================================================================

/// In-order iterator over a [`PriceTree`], using an explicit stack of pending
/// ancestors.
#[derive(Debug)]
pub struct InOrder<'a> {
    tree: &'a PriceTree,
    stack: Vec<usize>,
    remaining: usize,
}

impl<'a> InOrder<'a> {
    fn new(tree: &'a PriceTree) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::with_capacity(tree.height() as usize),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<usize>) {
        while let Some(key) = node {
            self.stack.push(key);
            node = self.tree.nodes[key].left;
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a OrderRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.stack.pop()?;
        let tree = self.tree;
        let node = &tree.nodes[key];
        self.push_left_spine(node.right);
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for InOrder<'_> {}

impl<'a> IntoIterator for &'a PriceTree {
    type Item = &'a OrderRecord;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
