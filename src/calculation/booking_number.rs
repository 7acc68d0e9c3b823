//! Booking number formatting and allocation.
//!
//! Booking numbers look like `GOV-20261014-000042`: a prefix, the date the
//! number was issued, and a zero-padded sequence. Sequences come from a
//! single [`BookingNumberAllocator`] so numbers issued by one process never
//! repeat.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

const DATE_FORMAT: &str = "%Y%m%d";

/// A parsed booking number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingNumber {
    /// Leading prefix, e.g. `GOV`. May itself contain dashes.
    pub prefix: String,
    /// Date the number was issued.
    pub issued_on: NaiveDate,
    /// Sequence number.
    pub sequence: u64,
}

impl fmt::Display for BookingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{:06}",
            self.prefix,
            self.issued_on.format(DATE_FORMAT),
            self.sequence
        )
    }
}

impl FromStr for BookingNumber {
    type Err = EngineError;

    fn from_str(value: &str) -> EngineResult<Self> {
        let invalid = |message: &str| EngineError::InvalidBookingNumber {
            value: value.to_string(),
            message: message.to_string(),
        };

        let mut parts = value.rsplitn(3, '-');
        let (Some(sequence), Some(date), Some(prefix)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid("expected PREFIX-YYYYMMDD-NNNNNN"));
        };

        if prefix.is_empty() {
            return Err(invalid("prefix is empty"));
        }
        if sequence.is_empty() || !sequence.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("sequence must be numeric"));
        }

        let issued_on = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| invalid("date must be YYYYMMDD"))?;
        let sequence = sequence
            .parse()
            .map_err(|_| invalid("sequence out of range"))?;

        Ok(Self {
            prefix: prefix.to_string(),
            issued_on,
            sequence,
        })
    }
}

/// Formats a booking number from its parts.
///
/// # Example
///
/// ```
/// use booking_engine::calculation::format_booking_number;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
/// assert_eq!(format_booking_number("GOV", date, 42), "GOV-20261014-000042");
/// ```
pub fn format_booking_number(prefix: &str, issued_on: NaiveDate, sequence: u64) -> String {
    BookingNumber {
        prefix: prefix.to_string(),
        issued_on,
        sequence,
    }
    .to_string()
}

/// Parses a formatted booking number back into its parts.
pub fn parse_booking_number(value: &str) -> EngineResult<BookingNumber> {
    value.parse()
}

/// Hands out strictly increasing booking numbers.
///
/// The allocator is shared across request handlers; each call to
/// [`allocate`](Self::allocate) returns a sequence never returned before by
/// this allocator.
#[derive(Debug)]
pub struct BookingNumberAllocator {
    prefix: String,
    last: AtomicU64,
}

impl BookingNumberAllocator {
    /// Creates an allocator whose first number has sequence `last_issued + 1`.
    pub fn new(prefix: impl Into<String>, last_issued: u64) -> Self {
        Self {
            prefix: prefix.into(),
            last: AtomicU64::new(last_issued),
        }
    }

    /// The prefix this allocator issues numbers under.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Issues the next booking number, dated `issued_on`.
    pub fn allocate(&self, issued_on: NaiveDate) -> BookingNumber {
        let sequence = self.last.fetch_add(1, Ordering::Relaxed) + 1;
        BookingNumber {
            prefix: self.prefix.clone(),
            issued_on,
            sequence,
        }
    }
}
