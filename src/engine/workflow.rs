//! Workflow engine composing the inventory index operations.
//!
//! Each workflow is one compound operation the way a dispatch desk uses
//! the system: receive a shipment, reserve an outbound order against the
//! soonest-to-expire batch, cancel an entry or a single order, and pull a
//! full report. Workflows run to completion before the next is invoked
//! (single-threaded model); each either completes fully or fails with no
//! state change.

use crate::error::LogisticsError;
use crate::index::DateIndex;
use crate::types::{DispatchTicket, ExpiryDate, InventoryReport, PendingOrder, ReportLine};

/// Drives the [`DateIndex`] through the logistics workflows.
///
/// The engine carries only the ticket counter; all inventory state lives
/// in the index it is handed.
///
/// ## Example
///
/// ```
/// use port_logistics::engine::LogisticsEngine;
/// use port_logistics::index::DateIndex;
/// use port_logistics::types::ExpiryDate;
///
/// let mut index = DateIndex::new();
/// let mut engine = LogisticsEngine::new();
///
/// engine
///     .receive(&mut index, ExpiryDate::new(20250515).unwrap(), "Mangoes", 50)
///     .unwrap();
///
/// let ticket = engine.place_order(&mut index, "Guapi", 20).unwrap();
/// assert_eq!(ticket.product, "Mangoes");
/// assert_eq!(ticket.remaining_stock, 30);
/// ```
#[derive(Debug)]
pub struct LogisticsEngine {
    /// Next dispatch ticket ID (sequential, starting at 1)
    next_ticket_id: u64,
}

impl Default for LogisticsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LogisticsEngine {
    /// Create a new engine
    pub fn new() -> Self {
        Self { next_ticket_id: 1 }
    }

    /// Peek the ID the next accepted placement will receive
    #[inline]
    pub fn peek_next_ticket_id(&self) -> u64 {
        self.next_ticket_id
    }

    /// Receive a shipment: insert a new inventory entry.
    ///
    /// # Errors
    ///
    /// [`LogisticsError::DuplicateDate`] if an entry with this expiry date
    /// already exists; the index is untouched.
    pub fn receive(
        &mut self,
        index: &mut DateIndex,
        date: ExpiryDate,
        product: impl Into<String>,
        stock: u32,
    ) -> Result<(), LogisticsError> {
        index.insert(date, product, stock)
    }

    /// Place an outbound order against the soonest-to-expire entry.
    ///
    /// Dispatch always targets the minimum date key. On success the
    /// entry's stock is decremented and the order joins its FIFO queue;
    /// a sequential [`DispatchTicket`] records the placement.
    ///
    /// # Errors
    ///
    /// - [`LogisticsError::EmptyInventory`] if the index has no entries
    /// - [`LogisticsError::InsufficientStock`] if `quantity` exceeds the
    ///   target entry's stock (stock and queue untouched)
    pub fn place_order(
        &mut self,
        index: &mut DateIndex,
        destination: impl Into<String>,
        quantity: u32,
    ) -> Result<DispatchTicket, LogisticsError> {
        let key = index.min_key().ok_or(LogisticsError::EmptyInventory)?;

        let (date, product, available) = {
            let entry = index.entry(key).ok_or(LogisticsError::EmptyInventory)?;
            (entry.date, entry.product.clone(), entry.stock)
        };

        if quantity > available {
            return Err(LogisticsError::InsufficientStock {
                requested: quantity,
                available,
            });
        }

        // Deduct first, then enqueue; nothing interleaves in the
        // single-threaded model, so the pair is atomic to callers.
        let destination = destination.into();
        let remaining = available - quantity;
        index
            .entry_mut(key)
            .expect("minimum key addresses a live entry")
            .stock = remaining;
        index
            .enqueue_at(key, PendingOrder::new(destination.clone(), quantity))
            .expect("minimum key addresses a live entry");

        let id = self.next_ticket_id;
        self.next_ticket_id += 1;

        Ok(DispatchTicket::new(
            id,
            date,
            product,
            destination,
            quantity,
            remaining,
        ))
    }

    /// Cancel an inventory entry outright, discarding its queued orders.
    ///
    /// # Errors
    ///
    /// [`LogisticsError::DateNotFound`] if no entry carries this date.
    pub fn cancel_entry(
        &mut self,
        index: &mut DateIndex,
        date: ExpiryDate,
    ) -> Result<(), LogisticsError> {
        index.remove(date)
    }

    /// Cancel one queued order, restoring its quantity to the entry's
    /// stock.
    ///
    /// # Returns
    ///
    /// The restored quantity.
    ///
    /// # Errors
    ///
    /// - [`LogisticsError::DateNotFound`] if no entry carries this date
    /// - [`LogisticsError::OrderNotFound`] if no queued order matches the
    ///   (destination, quantity) pair exactly (queue and stock untouched)
    pub fn cancel_order(
        &mut self,
        index: &mut DateIndex,
        date: ExpiryDate,
        destination: &str,
        quantity: u32,
    ) -> Result<u32, LogisticsError> {
        let key = index
            .find(date)
            .ok_or(LogisticsError::DateNotFound(date))?;

        index
            .cancel_order_at(key, destination, quantity)
            .ok_or_else(|| LogisticsError::OrderNotFound {
                date,
                destination: destination.to_string(),
                quantity,
            })
    }

    /// Produce the inventory report: one line per entry, ascending by
    /// expiry date (nearest-to-expire first), with a fingerprint over the
    /// whole snapshot.
    ///
    /// # Errors
    ///
    /// [`LogisticsError::EmptyInventory`] if the index has no entries.
    pub fn report(&self, index: &DateIndex) -> Result<InventoryReport, LogisticsError> {
        if index.is_empty() {
            return Err(LogisticsError::EmptyInventory);
        }

        let mut lines = Vec::with_capacity(index.len());
        index.for_each_ascending(|entry| {
            lines.push(ReportLine {
                date: entry.date,
                product: entry.product.clone(),
                stock: entry.stock,
                pending_orders: entry.pending_orders(),
            });
        });

        Ok(InventoryReport::new(lines))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
