//! Balanced expiry-date index (AVL) over arena storage.
//!
//! ## Architecture
//!
//! `DateIndex` owns two slab arenas:
//!
//! - **Entry arena** (`Slab<EntryNode>`): the tree nodes, linked by arena
//!   keys instead of pointers
//! - **Order arena** (`Slab<OrderNode>`): every pending order of every
//!   entry's dispatch queue
//!
//! All structural operations are root-down recursive and return the
//! updated subtree root key, which the parent frame writes back - the
//! arena rendition of the recursive-return-new-root pattern.
//!
//! ## Balance Discipline
//!
//! After insert and delete the height cache is recomputed bottom-up along
//! the mutation path and the four AVL rotation cases restore
//! `|height(left) - height(right)| <= 1` at every node:
//!
//! - Insert tie-breaks on the inserted date (LL/LR/RR/RL against the
//!   child's key)
//! - Delete tie-breaks on the child's own balance factor, since no fresh
//!   key is in play
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Insert | O(log n) |
//! | Search by date | O(log n) |
//! | Minimum (soonest expiry) | O(log n) |
//! | Delete | O(log n) |
//! | In-order traversal | O(n) |
//!
//! ## Example
//!
//! ```
//! use port_logistics::index::DateIndex;
//! use port_logistics::types::ExpiryDate;
//!
//! let mut index = DateIndex::new();
//! index.insert(ExpiryDate::new(20250601).unwrap(), "Bananas", 100).unwrap();
//! index.insert(ExpiryDate::new(20250515).unwrap(), "Mangoes", 50).unwrap();
//!
//! // Soonest to expire wins the minimum query
//! assert_eq!(index.min().unwrap().product, "Mangoes");
//! ```

use std::cmp::max;
use std::mem;

use slab::Slab;

use crate::error::LogisticsError;
use crate::index::{EntryNode, OrderNode};
use crate::types::{ExpiryDate, PendingOrder};

/// Self-balancing inventory index keyed by expiry date.
///
/// Entries and their queued orders live in pre-allocatable arenas; the
/// index holds only the root key.
#[derive(Debug, Default)]
pub struct DateIndex {
    /// Arena of tree entries
    entries: Slab<EntryNode>,

    /// Arena of queued orders, shared by every entry's queue
    orders: Slab<OrderNode>,

    /// Root of the tree (arena key)
    root: Option<usize>,
}

impl DateIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self {
            entries: Slab::new(),
            orders: Slab::new(),
            root: None,
        }
    }

    /// Create an index with pre-allocated arena capacity
    ///
    /// # Example
    ///
    /// ```
    /// use port_logistics::index::DateIndex;
    ///
    /// let index = DateIndex::with_capacity(10_000);
    /// assert!(index.capacity() >= 10_000);
    /// ```
    pub fn with_capacity(entry_capacity: usize) -> Self {
        Self {
            entries: Slab::with_capacity(entry_capacity),
            orders: Slab::with_capacity(entry_capacity),
            root: None,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Pre-allocated entry slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Number of entries in the index
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index holds no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total queued orders across all entries
    #[inline]
    pub fn queued_orders(&self) -> usize {
        self.orders.len()
    }

    /// Height of the tree (0 for an empty index)
    #[inline]
    pub fn height(&self) -> u8 {
        self.node_height(self.root)
    }

    // ========================================================================
    // Insert
    // ========================================================================

    /// Insert a new entry.
    ///
    /// # Errors
    ///
    /// [`LogisticsError::DuplicateDate`] if an entry with this date already
    /// exists; the tree is left untouched.
    pub fn insert(
        &mut self,
        date: ExpiryDate,
        product: impl Into<String>,
        stock: u32,
    ) -> Result<(), LogisticsError> {
        let new_root = self.insert_at(self.root, date, product.into(), stock)?;
        self.root = Some(new_root);
        Ok(())
    }

    /// Recursive insert returning the updated subtree root key
    fn insert_at(
        &mut self,
        node: Option<usize>,
        date: ExpiryDate,
        product: String,
        stock: u32,
    ) -> Result<usize, LogisticsError> {
        let key = match node {
            None => return Ok(self.entries.insert(EntryNode::new(date, product, stock))),
            Some(key) => key,
        };

        let node_date = self.entries[key].date;
        if date < node_date {
            let left = self.entries[key].left;
            let new_left = self.insert_at(left, date, product, stock)?;
            self.entries[key].left = Some(new_left);
        } else if date > node_date {
            let right = self.entries[key].right;
            let new_right = self.insert_at(right, date, product, stock)?;
            self.entries[key].right = Some(new_right);
        } else {
            return Err(LogisticsError::DuplicateDate(date));
        }

        self.update_height(key);
        Ok(self.rebalance_after_insert(key, date))
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Find the arena key of the entry with the given date
    pub fn find(&self, date: ExpiryDate) -> Option<usize> {
        self.find_at(self.root, date)
    }

    fn find_at(&self, node: Option<usize>, date: ExpiryDate) -> Option<usize> {
        let key = node?;
        let node_date = self.entries[key].date;

        if date == node_date {
            Some(key)
        } else if date < node_date {
            self.find_at(self.entries[key].left, date)
        } else {
            self.find_at(self.entries[key].right, date)
        }
    }

    /// Get the entry with the given date
    #[inline]
    pub fn get(&self, date: ExpiryDate) -> Option<&EntryNode> {
        self.find(date).map(|key| &self.entries[key])
    }

    /// Check if an entry with the given date exists
    #[inline]
    pub fn contains(&self, date: ExpiryDate) -> bool {
        self.find(date).is_some()
    }

    /// Get an entry by arena key
    #[inline]
    pub fn entry(&self, key: usize) -> Option<&EntryNode> {
        self.entries.get(key)
    }

    /// Get a mutable entry by arena key
    #[inline]
    pub fn entry_mut(&mut self, key: usize) -> Option<&mut EntryNode> {
        self.entries.get_mut(key)
    }

    // ========================================================================
    // Minimum (soonest to expire)
    // ========================================================================

    /// Arena key of the entry with the smallest date, or `None` if empty
    pub fn min_key(&self) -> Option<usize> {
        self.root.map(|root| self.min_from(root))
    }

    /// The entry with the smallest date (soonest to expire)
    #[inline]
    pub fn min(&self) -> Option<&EntryNode> {
        self.min_key().map(|key| &self.entries[key])
    }

    /// Leftmost entry of the subtree rooted at `key`
    fn min_from(&self, key: usize) -> usize {
        let mut current = key;
        while let Some(left) = self.entries[current].left {
            current = left;
        }
        current
    }

    // ========================================================================
    // Delete
    // ========================================================================

    /// Remove the entry with the given date, draining its dispatch queue.
    ///
    /// # Errors
    ///
    /// [`LogisticsError::DateNotFound`] if no entry carries this date; the
    /// tree is left untouched.
    pub fn remove(&mut self, date: ExpiryDate) -> Result<(), LogisticsError> {
        let new_root = self.remove_at(self.root, date)?;
        self.root = new_root;
        Ok(())
    }

    /// Recursive delete returning the updated subtree root key
    fn remove_at(
        &mut self,
        node: Option<usize>,
        date: ExpiryDate,
    ) -> Result<Option<usize>, LogisticsError> {
        let key = node.ok_or(LogisticsError::DateNotFound(date))?;
        let node_date = self.entries[key].date;

        if date < node_date {
            let left = self.entries[key].left;
            let new_left = self.remove_at(left, date)?;
            self.entries[key].left = new_left;
        } else if date > node_date {
            let right = self.entries[key].right;
            let new_right = self.remove_at(right, date)?;
            self.entries[key].right = new_right;
        } else {
            let left = self.entries[key].left;
            let right = self.entries[key].right;

            // At most one child: splice the node out and cascade into
            // its queue.
            if left.is_none() || right.is_none() {
                let mut removed = self.entries.remove(key);
                removed.queue.drain(&mut self.orders);
                return Ok(left.or(right));
            }

            // Two children: promote the in-order successor. The successor's
            // queue moves over wholesale (ownership transfer), leaving the
            // successor with an empty queue so its own removal below drains
            // nothing - no loss, no double free.
            let succ = self.min_from(right.expect("two-children case has a right subtree"));
            let succ_date = self.entries[succ].date;
            let succ_product = self.entries[succ].product.clone();
            let succ_stock = self.entries[succ].stock;
            let succ_queue = mem::take(&mut self.entries[succ].queue);

            let mut doomed_queue = mem::replace(&mut self.entries[key].queue, succ_queue);
            doomed_queue.drain(&mut self.orders);

            let entry = &mut self.entries[key];
            entry.date = succ_date;
            entry.product = succ_product;
            entry.stock = succ_stock;

            let new_right = self.remove_at(right, succ_date)?;
            self.entries[key].right = new_right;
        }

        self.update_height(key);
        Ok(Some(self.rebalance_after_remove(key)))
    }

    /// Release every entry and queued order
    pub fn clear(&mut self) {
        self.entries.clear();
        self.orders.clear();
        self.root = None;
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Visit every entry in ascending date order (soonest expiry first)
    pub fn for_each_ascending<F: FnMut(&EntryNode)>(&self, mut visit: F) {
        self.walk(self.root, &mut visit);
    }

    fn walk<F: FnMut(&EntryNode)>(&self, node: Option<usize>, visit: &mut F) {
        if let Some(key) = node {
            self.walk(self.entries[key].left, visit);
            visit(&self.entries[key]);
            self.walk(self.entries[key].right, visit);
        }
    }

    /// All dates in ascending order
    pub fn dates_ascending(&self) -> Vec<ExpiryDate> {
        let mut dates = Vec::with_capacity(self.len());
        self.for_each_ascending(|entry| dates.push(entry.date));
        dates
    }

    // ========================================================================
    // Per-entry Order Operations
    // ========================================================================

    /// Append a pending order to the entry's dispatch queue.
    ///
    /// The caller has already validated the quantity against the entry's
    /// stock and deducted it (see the place-order workflow).
    ///
    /// # Returns
    ///
    /// The order's arena key, or `None` if the entry key is vacant
    pub fn enqueue_at(&mut self, key: usize, order: PendingOrder) -> Option<usize> {
        let entry = self.entries.get_mut(key)?;
        Some(entry.queue.push_back(order, &mut self.orders))
    }

    /// Cancel the first queued order matching (destination, quantity)
    /// exactly, restoring its quantity to the entry's stock.
    ///
    /// # Returns
    ///
    /// The restored quantity, or `None` if no order matched (entry and
    /// queue untouched)
    pub fn cancel_order_at(
        &mut self,
        key: usize,
        destination: &str,
        quantity: u32,
    ) -> Option<u32> {
        let entry = self.entries.get_mut(key)?;
        let restored = entry
            .queue
            .remove_matching(destination, quantity, &mut self.orders)?;
        entry.stock += restored;
        Some(restored)
    }

    /// Orders pending under the entry, oldest first
    pub fn orders_at(&self, key: usize) -> Vec<PendingOrder> {
        match self.entries.get(key) {
            Some(entry) => entry.queue.iter(&self.orders).cloned().collect(),
            None => Vec::new(),
        }
    }

    // ========================================================================
    // Height Bookkeeping and Rotations
    // ========================================================================

    /// Cached height of a subtree (0 for empty)
    #[inline]
    fn node_height(&self, node: Option<usize>) -> u8 {
        node.map_or(0, |key| self.entries[key].height)
    }

    /// Recompute a node's cached height from its children
    fn update_height(&mut self, key: usize) {
        let left = self.node_height(self.entries[key].left);
        let right = self.node_height(self.entries[key].right);
        self.entries[key].height = 1 + max(left, right);
    }

    /// height(left) - height(right)
    fn balance_factor(&self, key: usize) -> i32 {
        let left = self.node_height(self.entries[key].left) as i32;
        let right = self.node_height(self.entries[key].right) as i32;
        left - right
    }

    /// Right rotation around `y`; returns the new subtree root.
    ///
    /// ```text
    ///       y              x
    ///      / \            / \
    ///     x   C    ->    A   y
    ///    / \                / \
    ///   A   B              B   C
    /// ```
    fn rotate_right(&mut self, y: usize) -> usize {
        let x = self.entries[y].left.expect("rotate_right requires a left child");
        let b = self.entries[x].right;

        self.entries[x].right = Some(y);
        self.entries[y].left = b;

        self.update_height(y);
        self.update_height(x);
        x
    }

    /// Left rotation around `x`; mirror of [`Self::rotate_right`]
    fn rotate_left(&mut self, x: usize) -> usize {
        let y = self.entries[x].right.expect("rotate_left requires a right child");
        let b = self.entries[y].left;

        self.entries[y].left = Some(x);
        self.entries[x].right = b;

        self.update_height(x);
        self.update_height(y);
        y
    }

    /// Four-case rebalance after insert, tie-breaking on the inserted date
    fn rebalance_after_insert(&mut self, key: usize, date: ExpiryDate) -> usize {
        let balance = self.balance_factor(key);

        if balance > 1 {
            let left = self.entries[key].left.expect("left-heavy node has a left child");
            if date < self.entries[left].date {
                // Left-Left
                return self.rotate_right(key);
            }
            // Left-Right
            let new_left = self.rotate_left(left);
            self.entries[key].left = Some(new_left);
            return self.rotate_right(key);
        }

        if balance < -1 {
            let right = self.entries[key].right.expect("right-heavy node has a right child");
            if date > self.entries[right].date {
                // Right-Right
                return self.rotate_left(key);
            }
            // Right-Left
            let new_right = self.rotate_right(right);
            self.entries[key].right = Some(new_right);
            return self.rotate_left(key);
        }

        key
    }

    /// Four-case rebalance after delete, tie-breaking on the child's own
    /// balance factor (no fresh key to compare against)
    fn rebalance_after_remove(&mut self, key: usize) -> usize {
        let balance = self.balance_factor(key);

        if balance > 1 {
            let left = self.entries[key].left.expect("left-heavy node has a left child");
            if self.balance_factor(left) >= 0 {
                return self.rotate_right(key);
            }
            let new_left = self.rotate_left(left);
            self.entries[key].left = Some(new_left);
            return self.rotate_right(key);
        }

        if balance < -1 {
            let right = self.entries[key].right.expect("right-heavy node has a right child");
            if self.balance_factor(right) <= 0 {
                return self.rotate_left(key);
            }
            let new_right = self.rotate_right(right);
            self.entries[key].right = Some(new_right);
            return self.rotate_left(key);
        }

        key
    }

    // ========================================================================
    // Invariant Validators (used by tests and stress runs)
    // ========================================================================

    /// Verify the AVL balance invariant and the height cache at every node
    pub fn is_height_balanced(&self) -> bool {
        self.check_balance(self.root).is_some()
    }

    /// Returns the actual subtree height, or `None` on any violation
    fn check_balance(&self, node: Option<usize>) -> Option<u32> {
        let key = match node {
            None => return Some(0),
            Some(key) => key,
        };

        let left = self.check_balance(self.entries[key].left)?;
        let right = self.check_balance(self.entries[key].right)?;

        if left.abs_diff(right) > 1 {
            return None;
        }

        let height = 1 + max(left, right);
        if u32::from(self.entries[key].height) != height {
            return None;
        }
        Some(height)
    }

    /// Verify strict BST ordering: in-order dates strictly increase
    pub fn is_search_ordered(&self) -> bool {
        let dates = self.dates_ascending();
        dates.windows(2).all(|pair| pair[0] < pair[1])
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
