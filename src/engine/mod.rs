//! Workflow engine module.
//!
//! ## Design Principles
//!
//! 1. **Whole-or-nothing**: every workflow either completes fully or
//!    fails with no state change
//! 2. **Soonest expiry first**: dispatch always reserves against the
//!    entry with the minimum date key
//! 3. **Synchronous execution**: one workflow runs to completion before
//!    the next starts
//!
//! ## Workflows
//!
//! - **Receive**: insert a shipment (duplicate dates rejected)
//! - **Place order**: stock check, deduct, enqueue, ticket
//! - **Cancel entry**: remove the entry and its whole queue
//! - **Cancel order**: remove one queued order, restore its stock
//! - **Report**: ascending in-order snapshot with fingerprint
//!
//! ## Example
//!
//! ```
//! use port_logistics::engine::LogisticsEngine;
//! use port_logistics::index::DateIndex;
//! use port_logistics::types::ExpiryDate;
//!
//! let mut index = DateIndex::new();
//! let mut engine = LogisticsEngine::new();
//!
//! engine
//!     .receive(&mut index, ExpiryDate::new(20250601).unwrap(), "Bananas", 100)
//!     .unwrap();
//! let report = engine.report(&index).unwrap();
//!
//! assert_eq!(report.len(), 1);
//! ```

pub mod workflow;

pub use workflow::LogisticsEngine;
