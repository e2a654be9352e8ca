//! Inventory index module: the balanced expiry-date tree and its queues.
//!
//! ## Architecture
//!
//! The index is an AVL tree over arena storage:
//!
//! - **Slab arenas**: entries and queued orders live in `Slab`s and link
//!   to each other by stable `usize` keys
//! - **Per-entry FIFO**: each entry owns a [`DispatchQueue`] of pending
//!   outbound orders
//! - **Self-balancing**: insert and delete rebalance bottom-up with the
//!   four AVL rotation cases
//!
//! ## Components
//!
//! - [`EntryNode`]: one inventory entry (date key, product, stock, queue,
//!   height cache, child keys)
//! - [`OrderNode`]: one queued order with its next-link
//! - [`DispatchQueue`]: FIFO metadata (head/tail keys, cached length)
//! - [`DateIndex`]: the tree itself, owner of both arenas
//!
//! ## Example
//!
//! ```
//! use port_logistics::index::DateIndex;
//! use port_logistics::types::ExpiryDate;
//!
//! let mut index = DateIndex::with_capacity(100);
//! index.insert(ExpiryDate::new(20250601).unwrap(), "Bananas", 100).unwrap();
//!
//! assert_eq!(index.min().unwrap().product, "Bananas");
//! ```

pub mod avl;
pub mod node;
pub mod queue;

pub use avl::DateIndex;
pub use node::EntryNode;
pub use queue::{DispatchQueue, OrderNode};
