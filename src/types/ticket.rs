//! Dispatch ticket emitted for every accepted order placement.
//!
//! The engine hands one back per successful place-order workflow so the
//! caller knows which entry absorbed the reservation and how much stock
//! remains there.

use crate::types::ExpiryDate;

/// Record of one accepted dispatch placement.
///
/// ## Terminology
///
/// - **Entry**: the inventory entry the order was queued under - always the
///   one nearest to its expiry date at placement time.
/// - **Remaining stock**: the entry's stock after the reservation was
///   deducted.
///
/// ## Example
///
/// ```
/// use port_logistics::types::{DispatchTicket, ExpiryDate};
///
/// let ticket = DispatchTicket::new(
///     1,                                      // ticket id
///     ExpiryDate::new(20250515).unwrap(),     // entry date
///     "Mangoes".to_string(),                  // product
///     "Guapi".to_string(),                    // destination
///     20,                                     // quantity
///     30,                                     // remaining stock
/// );
/// assert_eq!(ticket.remaining_stock, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchTicket {
    /// Sequential ticket identifier (assigned by the engine)
    pub id: u64,

    /// Expiry date of the entry the order was queued under
    pub date: ExpiryDate,

    /// Product name of that entry
    pub product: String,

    /// Destination of the placed order
    pub destination: String,

    /// Reserved quantity
    pub quantity: u32,

    /// Entry stock remaining after the reservation
    pub remaining_stock: u32,
}

impl DispatchTicket {
    /// Create a new dispatch ticket
    pub fn new(
        id: u64,
        date: ExpiryDate,
        product: String,
        destination: String,
        quantity: u32,
        remaining_stock: u32,
    ) -> Self {
        Self {
            id,
            date,
            product,
            destination,
            quantity,
            remaining_stock,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_new() {
        let ticket = DispatchTicket::new(
            7,
            ExpiryDate::new(20250515).unwrap(),
            "Mangoes".to_string(),
            "Guapi".to_string(),
            20,
            30,
        );

        assert_eq!(ticket.id, 7);
        assert_eq!(ticket.date.raw(), 20250515);
        assert_eq!(ticket.product, "Mangoes");
        assert_eq!(ticket.destination, "Guapi");
        assert_eq!(ticket.quantity, 20);
        assert_eq!(ticket.remaining_stock, 30);
    }
}
