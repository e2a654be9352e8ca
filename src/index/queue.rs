//! Dispatch queue: pending orders of a single inventory entry.
//!
//! ## Design
//!
//! A `DispatchQueue` holds the outbound orders reserved against one
//! inventory entry, in FIFO order. The order data itself lives in a shared
//! `Slab<OrderNode>` arena owned by the index; the queue only holds the
//! head/tail keys and a cached length.
//!
//! ## Queue Structure
//!
//! ```text
//! head (oldest) -> order2 -> order3 -> tail (newest)
//! ```
//!
//! - New orders are appended at the tail (O(1) via the tail key)
//! - Cancellation removes the first element matching a
//!   (destination, quantity) pair, scanning from the head
//! - Links are single-direction; removal rewires the predecessor found
//!   during the scan

use slab::Slab;

use crate::types::PendingOrder;

/// Order node stored in the shared order arena.
///
/// Holds the order data plus the key of the next (newer) order in the same
/// queue. Keys are arena indices (`usize`), not direct references.
#[derive(Debug, Clone)]
pub struct OrderNode {
    /// The queued order
    pub order: PendingOrder,

    /// Next order in the owning queue (arena key).
    /// None if this is the tail (newest order).
    pub next: Option<usize>,
}

impl OrderNode {
    /// Create a new unlinked order node
    #[inline]
    pub fn new(order: PendingOrder) -> Self {
        Self { order, next: None }
    }
}

/// FIFO queue of pending orders owned by exactly one inventory entry.
///
/// The queue is only metadata; element storage lives in the arena passed to
/// each operation. Taking a queue by value (`mem::take`) transfers
/// ownership of its elements without touching them - this is how the
/// successor's queue moves during two-children deletion.
#[derive(Debug, Clone, Default)]
pub struct DispatchQueue {
    /// Head of the queue (oldest order, arena key)
    head: Option<usize>,

    /// Tail of the queue (newest order, arena key)
    tail: Option<usize>,

    /// Number of queued orders
    len: usize,
}

impl DispatchQueue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pending orders in the queue
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the queue is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Arena key of the oldest order, if any
    #[inline]
    pub fn peek_head(&self) -> Option<usize> {
        self.head
    }

    /// Append an order at the tail of the queue.
    ///
    /// FIFO ordering is preserved: the head stays the oldest reservation.
    /// The caller is responsible for having already deducted the order's
    /// quantity from the owning entry's stock.
    ///
    /// # Returns
    ///
    /// The arena key of the queued order
    pub fn push_back(&mut self, order: PendingOrder, arena: &mut Slab<OrderNode>) -> usize {
        let key = arena.insert(OrderNode::new(order));

        if let Some(tail_key) = self.tail {
            let tail_node = arena.get_mut(tail_key).expect("invalid tail key");
            tail_node.next = Some(key);
        } else {
            // Empty queue - this is also the head
            self.head = Some(key);
        }

        self.tail = Some(key);
        self.len += 1;
        key
    }

    /// Remove the first order matching the (destination, quantity) pair
    /// exactly, scanning from the head.
    ///
    /// # Returns
    ///
    /// The removed order's quantity, or `None` if no order matched.
    /// On `None` the queue is untouched.
    pub fn remove_matching(
        &mut self,
        destination: &str,
        quantity: u32,
        arena: &mut Slab<OrderNode>,
    ) -> Option<u32> {
        let mut prev: Option<usize> = None;
        let mut cursor = self.head;

        while let Some(key) = cursor {
            let node = arena.get(key).expect("invalid order key");
            if node.order.matches(destination, quantity) {
                let next = node.next;

                match prev {
                    None => self.head = next,
                    Some(prev_key) => {
                        arena.get_mut(prev_key).expect("invalid prev key").next = next;
                    }
                }
                if self.tail == Some(key) {
                    self.tail = prev;
                }

                self.len -= 1;
                let removed = arena.remove(key);
                return Some(removed.order.quantity);
            }

            prev = Some(key);
            cursor = node.next;
        }

        None
    }

    /// Free every queued order from the arena.
    ///
    /// Called only as part of owning-entry destruction.
    pub fn drain(&mut self, arena: &mut Slab<OrderNode>) {
        let mut cursor = self.head.take();
        self.tail = None;
        self.len = 0;

        while let Some(key) = cursor {
            cursor = arena.remove(key).next;
        }
    }

    /// Iterate the queued orders from oldest to newest
    pub fn iter<'a>(&self, arena: &'a Slab<OrderNode>) -> impl Iterator<Item = &'a PendingOrder> {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let key = cursor?;
            let node = &arena[key];
            cursor = node.next;
            Some(&node.order)
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
