//! Pending dispatch order type.
//!
//! A `PendingOrder` is one outbound shipment reservation: a destination and
//! the quantity reserved for it. Orders live in the FIFO queue of exactly
//! one inventory entry; the quantity has already been subtracted from that
//! entry's stock by the time the order is queued.

/// A pending outbound order awaiting dispatch.
///
/// ## Lifecycle
///
/// Created by the place-order workflow (after the stock check), destroyed
/// either by explicit cancellation or when the owning inventory entry is
/// removed.
///
/// ## Example
///
/// ```
/// use port_logistics::types::PendingOrder;
///
/// let order = PendingOrder::new("Guapi", 20);
/// assert!(order.matches("Guapi", 20));
/// assert!(!order.matches("Guapi", 25));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOrder {
    /// Destination the shipment is bound for
    pub destination: String,

    /// Reserved quantity (positive; already deducted from the entry's stock)
    pub quantity: u32,
}

impl PendingOrder {
    /// Create a new pending order
    pub fn new(destination: impl Into<String>, quantity: u32) -> Self {
        Self {
            destination: destination.into(),
            quantity,
        }
    }

    /// Exact-match predicate used by cancellation: both the destination and
    /// the quantity must match.
    #[inline]
    pub fn matches(&self, destination: &str, quantity: u32) -> bool {
        self.quantity == quantity && self.destination == destination
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
