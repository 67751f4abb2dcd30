use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub conference: ConferenceConfig,
    #[serde(default)]
    pub notifier: NotifierConfig,
    #[serde(default)]
    pub booking: BookingConfig,
}

/// Conference being sold
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConferenceConfig {
    #[serde(default = "default_conference_name")]
    pub name: String,
    /// Seats available when the process starts
    #[serde(default = "default_total_tickets")]
    pub total_tickets: u32,
}

impl Default for ConferenceConfig {
    fn default() -> Self {
        Self {
            name: default_conference_name(),
            total_tickets: default_total_tickets(),
        }
    }
}

fn default_conference_name() -> String {
    "Go Conference".to_string()
}

fn default_total_tickets() -> u32 {
    50
}

/// Deferred confirmation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotifierConfig {
    /// How long the notifier waits before "sending" the ticket
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl NotifierConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

fn default_delay_ms() -> u64 {
    10_000
}

/// Booking policy
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BookingConfig {
    /// Stop the session on invalid input instead of warning and continuing
    #[serde(default)]
    pub enforce_validation: bool,
}
