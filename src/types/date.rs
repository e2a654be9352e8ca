//! Validated expiry date, the unique key of the inventory index.
//!
//! ## Encoding
//!
//! Dates are packed as `YYYYMMDD` in a single `u32` (e.g. `20250515` for
//! 2025-05-15). The packing is order-preserving: comparing raw values
//! compares calendar dates, so the index can order entries on the integer
//! directly.
//!
//! ## Validation
//!
//! [`ExpiryDate::new`] rejects anything that is not a real calendar date:
//! month outside 1..=12, day outside the month's length (Gregorian leap
//! rules for February), or a year of zero.

use std::fmt;

use crate::error::LogisticsError;

/// Smallest representable packed date: year 1, January 1st
const MIN_RAW: u32 = 1_01_01;

/// Largest representable packed date: year 9999, December 31st
const MAX_RAW: u32 = 9999_12_31;

/// A calendar date packed as `YYYYMMDD`, validated on construction.
///
/// `ExpiryDate` is `Copy` and orders chronologically, which makes it a
/// cheap, well-behaved tree key.
///
/// ## Example
///
/// ```
/// use port_logistics::types::date::ExpiryDate;
///
/// let date = ExpiryDate::new(20250515).unwrap();
/// assert_eq!(date.year(), 2025);
/// assert_eq!(date.month(), 5);
/// assert_eq!(date.day(), 15);
/// assert_eq!(date.to_string(), "2025-05-15");
///
/// // Not a real calendar date
/// assert!(ExpiryDate::new(20250230).is_err());
/// assert!(ExpiryDate::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpiryDate(u32);

impl ExpiryDate {
    /// Validate a packed `YYYYMMDD` value.
    ///
    /// # Errors
    ///
    /// [`LogisticsError::InvalidDate`] if the value does not encode a real
    /// calendar date.
    pub fn new(raw: u32) -> Result<Self, LogisticsError> {
        if !(MIN_RAW..=MAX_RAW).contains(&raw) {
            return Err(LogisticsError::InvalidDate(raw));
        }

        let year = raw / 10_000;
        let month = (raw / 100) % 100;
        let day = raw % 100;

        if month < 1 || month > 12 {
            return Err(LogisticsError::InvalidDate(raw));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(LogisticsError::InvalidDate(raw));
        }

        Ok(Self(raw))
    }

    /// Build a date from its components.
    ///
    /// # Errors
    ///
    /// [`LogisticsError::InvalidDate`] under the same rules as
    /// [`ExpiryDate::new`].
    pub fn from_ymd(year: u32, month: u32, day: u32) -> Result<Self, LogisticsError> {
        Self::new(year * 10_000 + month * 100 + day)
    }

    /// The packed `YYYYMMDD` value
    #[inline]
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// Calendar year
    #[inline]
    pub fn year(&self) -> u32 {
        self.0 / 10_000
    }

    /// Calendar month (1..=12)
    #[inline]
    pub fn month(&self) -> u32 {
        (self.0 / 100) % 100
    }

    /// Day of month
    #[inline]
    pub fn day(&self) -> u32 {
        self.0 % 100
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month(),
            self.day()
        )
    }
}

/// Days in the given month, honoring Gregorian leap years
fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Divisible by 4, except centuries not divisible by 400
fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

// ============================================================================
// Unit Tests
// ============================================================================
