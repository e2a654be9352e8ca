//! Core data types for the port logistics inventory core.
//!
//! ## Types
//!
//! - [`ExpiryDate`]: validated YYYYMMDD date, the unique index key
//! - [`PendingOrder`]: one queued outbound shipment reservation
//! - [`DispatchTicket`]: record emitted per accepted placement
//! - [`ReportLine`] / [`InventoryReport`]: in-order inventory snapshot
//!   with a SHA-256 fingerprint

mod order;
mod report;
mod ticket;
pub mod date;

// Re-export all types at module level
pub use date::ExpiryDate;
pub use order::PendingOrder;
pub use report::{InventoryReport, ReportLine};
pub use ticket::DispatchTicket;
