//! The interactive booking flow.

mod driver;
mod input;

pub use driver::{BookingSession, SessionSummary};
pub use input::TokenReader;

use thiserror::Error;

use crate::booking::BookingError;

/// Fatal errors that end a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input ended before {field} was entered")]
    UnexpectedEof { field: &'static str },

    #[error("expected a whole number of tickets, got {raw:?}")]
    InvalidTicketCount { raw: String },

    #[error("invalid input: {}", .problems.join("; "))]
    InvalidInput { problems: Vec<&'static str> },

    #[error("booking refused: {0}")]
    Booking(#[from] BookingError),
}
