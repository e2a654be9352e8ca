//! # Port Logistics
//!
//! In-memory port-logistics inventory core.
//!
//! ## Architecture
//!
//! The core consists of:
//! - **Types**: core data structures (ExpiryDate, PendingOrder,
//!   DispatchTicket, InventoryReport)
//! - **Index**: self-balancing (AVL) expiry-date index with slab-based
//!   arena storage, each entry owning a FIFO dispatch queue
//! - **Engine**: the workflows composing index operations (receive,
//!   place order, cancellations, report)
//!
//! ## Design Principles
//!
//! 1. **Balanced by construction**: every insert and delete restores the
//!    AVL invariant, so lookups stay O(log n)
//! 2. **Arena addressing**: entries and queued orders live in slabs and
//!    link by stable integer keys, never raw pointers
//! 3. **Ownership-scoped cleanup**: removing an entry drains its queue;
//!    successor promotion moves the queue instead of copying it
//! 4. **Synchronous execution**: single-threaded, every operation runs
//!    to completion

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: ExpiryDate, PendingOrder, DispatchTicket, reports
pub mod types;

/// Inventory index: AVL tree over arenas with per-entry dispatch queues
pub mod index;

/// Workflow engine: receive / place / cancel / report
pub mod engine;

/// Error taxonomy
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use engine::LogisticsEngine;
pub use error::LogisticsError;
pub use index::{DateIndex, DispatchQueue, EntryNode, OrderNode};
pub use types::{DispatchTicket, ExpiryDate, InventoryReport, PendingOrder, ReportLine};
