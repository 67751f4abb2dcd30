//! Booking record type.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::notifier::Confirmation;

/// One purchase of conference tickets by one attendee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRecord {
    first_name: String,
    last_name: String,
    email: String,
    tickets: u32,
    booked_at: DateTime<Utc>,
}

impl BookingRecord {
    /// Create a record stamped with the current time.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        tickets: u32,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            tickets,
            booked_at: Utc::now(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn tickets(&self) -> u32 {
        self.tickets
    }

    pub fn booked_at(&self) -> DateTime<Utc> {
        self.booked_at
    }

    /// The fields the deferred notifier needs, detached from the ledger.
    pub fn confirmation(&self) -> Confirmation {
        Confirmation {
            tickets: self.tickets,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        }
    }
}

impl fmt::Display for BookingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{} {} {} {}}}",
            self.first_name, self.last_name, self.email, self.tickets
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_ledger_dump_format() {
        let record = BookingRecord::new("Ada", "Lovelace", "ada@x.com", 3);
        assert_eq!(record.to_string(), "{Ada Lovelace ada@x.com 3}");
    }

    #[test]
    fn test_confirmation_carries_only_notification_fields() {
        let record = BookingRecord::new("Grace", "Hopper", "grace@navy.mil", 2);
        let confirmation = record.confirmation();
        assert_eq!(confirmation.tickets, 2);
        assert_eq!(confirmation.first_name, "Grace");
        assert_eq!(confirmation.last_name, "Hopper");
        assert_eq!(confirmation.email, "grace@navy.mil");
    }

    #[test]
    fn test_booked_at_is_now() {
        let before = Utc::now();
        let record = BookingRecord::new("Ada", "Lovelace", "ada@x.com", 1);
        let after = Utc::now();
        assert!(record.booked_at() >= before);
        assert!(record.booked_at() <= after);
    }
}
