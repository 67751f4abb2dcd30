//! Testing utilities.
//!
//! Provides an in-memory [`ConfirmationSink`](crate::notifier::ConfirmationSink)
//! so sessions and notifiers can be exercised without touching stdout.

mod recording_sink;

pub use recording_sink::{RecordedDelivery, RecordingSink};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::config::{BookingConfig, ConferenceConfig, Config, NotifierConfig};

    /// Config with a short notifier delay, suitable for real-clock tests.
    pub fn fast_config(total_tickets: u32) -> Config {
        Config {
            conference: ConferenceConfig {
                name: "Go Conference".to_string(),
                total_tickets,
            },
            notifier: NotifierConfig { delay_ms: 10 },
            booking: BookingConfig::default(),
        }
    }

    /// Stdin transcript answering the four prompts.
    pub fn answers(first: &str, last: &str, email: &str, tickets: &str) -> String {
        format!("{}\n{}\n{}\n{}\n", first, last, email, tickets)
    }
}
