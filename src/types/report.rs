//! Inventory report types.
//!
//! A report is the in-order projection of the index: one line per entry in
//! ascending expiry-date order, so the soonest-to-expire stock is listed
//! first. The report also carries a SHA-256 fingerprint of its canonical
//! byte encoding, which makes two snapshots comparable without walking the
//! lines.

use sha2::{Digest, Sha256};

use crate::types::ExpiryDate;

/// One line of the inventory report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    /// Expiry date of the entry
    pub date: ExpiryDate,

    /// Product name
    pub product: String,

    /// Current stock (reservations already deducted)
    pub stock: u32,

    /// Number of orders waiting in the entry's dispatch queue
    pub pending_orders: usize,
}

/// Inventory snapshot: report lines in ascending date order plus a
/// fingerprint over their canonical encoding.
///
/// ## Fingerprint
///
/// The 32-byte fingerprint is a SHA-256 hash of every line's fields in
/// traversal order. Identical inventory state always yields an identical
/// fingerprint.
///
/// ## Example
///
/// ```
/// use port_logistics::types::{ExpiryDate, InventoryReport, ReportLine};
///
/// let lines = vec![ReportLine {
///     date: ExpiryDate::new(20250601).unwrap(),
///     product: "Bananas".to_string(),
///     stock: 100,
///     pending_orders: 0,
/// }];
/// let report = InventoryReport::new(lines);
///
/// assert_eq!(report.len(), 1);
/// assert_eq!(report.fingerprint_hex().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryReport {
    /// Report lines, ascending by expiry date
    pub lines: Vec<ReportLine>,

    /// SHA-256 hash of the canonical line encoding
    pub fingerprint: [u8; 32],
}

impl InventoryReport {
    /// Build a report from lines already in ascending date order,
    /// computing the fingerprint.
    pub fn new(lines: Vec<ReportLine>) -> Self {
        let fingerprint = Self::compute_fingerprint(&lines);
        Self { lines, fingerprint }
    }

    /// Number of report lines
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the report carries no lines
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The fingerprint as a hex string
    pub fn fingerprint_hex(&self) -> String {
        hex::encode(self.fingerprint)
    }

    /// Hash the canonical encoding of the lines.
    ///
    /// Each line contributes its date, product bytes (length-prefixed so
    /// adjacent strings cannot alias), stock, and queue length.
    fn compute_fingerprint(lines: &[ReportLine]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for line in lines {
            hasher.update(line.date.raw().to_le_bytes());
            hasher.update((line.product.len() as u64).to_le_bytes());
            hasher.update(line.product.as_bytes());
            hasher.update(line.stock.to_le_bytes());
            hasher.update((line.pending_orders as u64).to_le_bytes());
        }
        let digest = hasher.finalize();

        let mut fingerprint = [0u8; 32];
        fingerprint.copy_from_slice(&digest);
        fingerprint
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
