//! In-memory booking ledger.

use std::fmt;

use thiserror::Error;

use super::BookingRecord;

/// Reasons the ledger refuses a booking.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("cannot book zero tickets")]
    ZeroTickets,

    #[error("only {remaining} tickets remaining, cannot book {requested}")]
    InsufficientCapacity { requested: u32, remaining: u32 },
}

/// Ordered bookings plus the count of unsold tickets.
///
/// Owned by a single driver; no interior locking.
#[derive(Debug, Clone)]
pub struct BookingLedger {
    total_capacity: u32,
    remaining: u32,
    records: Vec<BookingRecord>,
}

impl BookingLedger {
    pub fn new(total_capacity: u32) -> Self {
        Self {
            total_capacity,
            remaining: total_capacity,
            records: Vec::new(),
        }
    }

    /// Append a booking and take its tickets out of the remaining capacity.
    ///
    /// Callers are expected to have validated the request already. The
    /// ledger still refuses anything that would break its own counts, and
    /// leaves itself untouched when it does.
    pub fn book(&mut self, record: BookingRecord) -> Result<&BookingRecord, BookingError> {
        let requested = record.tickets();
        if requested == 0 {
            return Err(BookingError::ZeroTickets);
        }

        let remaining = self
            .remaining
            .checked_sub(requested)
            .ok_or(BookingError::InsufficientCapacity {
                requested,
                remaining: self.remaining,
            })?;

        self.remaining = remaining;
        self.records.push(record);

        tracing::debug!(
            tickets = requested,
            remaining = self.remaining,
            bookings = self.records.len(),
            "Booking recorded"
        );

        Ok(&self.records[self.records.len() - 1])
    }

    /// First names of every booking, in arrival order.
    pub fn first_names(&self) -> Vec<&str> {
        self.records.iter().map(BookingRecord::first_name).collect()
    }

    pub fn records(&self) -> &[BookingRecord] {
        &self.records
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn total_capacity(&self) -> u32 {
        self.total_capacity
    }

    pub fn is_sold_out(&self) -> bool {
        self.remaining == 0
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Display for BookingLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", record)?;
        }
        f.write_str("]")
    }
}
