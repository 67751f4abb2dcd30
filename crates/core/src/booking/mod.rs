//! Bookings: the record type, the in-memory ledger and input validation.

mod ledger;
mod types;
mod validate;

pub use ledger::{BookingError, BookingLedger};
pub use types::BookingRecord;
pub use validate::{
    is_valid_email, is_valid_name, is_valid_ticket_count, validate_booking, ValidationReport,
};
