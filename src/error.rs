//! Error taxonomy for the logistics core.
//!
//! Every failure here is recoverable and reported to the caller; none is
//! fatal to the process. No operation partially mutates state on failure:
//! a rejected insert leaves the tree untouched, a failed stock check leaves
//! stock and queue untouched, a failed cancellation leaves the queue
//! untouched.

use thiserror::Error;

use crate::types::ExpiryDate;

/// Errors reported by the inventory index and the workflow engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogisticsError {
    /// The raw value is not a valid YYYYMMDD calendar date
    #[error("invalid expiry date: {0} is not a valid YYYYMMDD value")]
    InvalidDate(u32),

    /// Insert attempted with an expiry date already present in the index
    #[error("an entry with expiry date {0} already exists")]
    DuplicateDate(ExpiryDate),

    /// No entry with the given expiry date exists
    #[error("no entry with expiry date {0}")]
    DateNotFound(ExpiryDate),

    /// No queued order with the given destination/quantity pair exists
    /// under the given entry
    #[error("no pending order to {destination} for {quantity} units under expiry date {date}")]
    OrderNotFound {
        date: ExpiryDate,
        destination: String,
        quantity: u32,
    },

    /// Requested quantity exceeds the entry's current stock
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// Minimum-key query or report attempted against an empty index
    #[error("inventory is empty")]
    EmptyInventory,
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let date = ExpiryDate::new(20250601).unwrap();

        assert_eq!(
            LogisticsError::DuplicateDate(date).to_string(),
            "an entry with expiry date 2025-06-01 already exists"
        );
        assert_eq!(
            LogisticsError::InsufficientStock {
                requested: 60,
                available: 50
            }
            .to_string(),
            "insufficient stock: requested 60, available 50"
        );
        assert_eq!(
            LogisticsError::EmptyInventory.to_string(),
            "inventory is empty"
        );
    }

    #[test]
    fn test_order_not_found_display() {
        let err = LogisticsError::OrderNotFound {
            date: ExpiryDate::new(20250515).unwrap(),
            destination: "Guapi".to_string(),
            quantity: 20,
        };

        assert_eq!(
            err.to_string(),
            "no pending order to Guapi for 20 units under expiry date 2025-05-15"
        );
    }
}
