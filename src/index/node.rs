//! Inventory entry node for arena-based tree storage.
//!
//! ## Design
//!
//! `EntryNode` is one inventory entry resident in the index's entry arena.
//! Child links are arena keys (`usize`), not references, so the tree can be
//! restructured by rewriting keys. Each node exclusively owns its
//! [`DispatchQueue`]; destroying the entry drains the queue with it.
//!
//! ## Height Cache
//!
//! `height` is the cached subtree height used by the balance checks
//! (1 for a leaf). The index recomputes it bottom-up after every
//! structural change along the mutation path.

use crate::index::DispatchQueue;
use crate::types::ExpiryDate;

/// One inventory entry: a product batch keyed by its expiry date.
///
/// The date is the unique tree key; it only ever changes during
/// successor promotion inside two-children deletion, where the node takes
/// over the successor's identity wholesale (date, product, stock, queue).
#[derive(Debug, Clone)]
pub struct EntryNode {
    /// Expiry date, the unique index key
    pub date: ExpiryDate,

    /// Product name
    pub product: String,

    /// Units on hand; pending reservations are already deducted
    pub stock: u32,

    /// FIFO queue of pending outbound orders against this entry
    pub queue: DispatchQueue,

    /// Cached subtree height (>= 1)
    pub height: u8,

    /// Left child (all dates strictly earlier), arena key
    pub left: Option<usize>,

    /// Right child (all dates strictly later), arena key
    pub right: Option<usize>,
}

impl EntryNode {
    /// Create a new leaf entry with an empty dispatch queue
    pub fn new(date: ExpiryDate, product: String, stock: u32) -> Self {
        Self {
            date,
            product,
            stock,
            queue: DispatchQueue::new(),
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Check if this node has no children
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of orders waiting in this entry's queue
    #[inline]
    pub fn pending_orders(&self) -> usize {
        self.queue.len()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
