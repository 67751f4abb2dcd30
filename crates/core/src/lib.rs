pub mod booking;
pub mod config;
pub mod notifier;
pub mod session;
pub mod sync;
pub mod testing;

pub use booking::{
    is_valid_email, is_valid_name, is_valid_ticket_count, validate_booking, BookingError,
    BookingLedger, BookingRecord, ValidationReport,
};
pub use config::{
    load_config, load_config_from_str, load_config_or_default, validate_config, BookingConfig,
    ConferenceConfig, Config, ConfigError, NotifierConfig,
};
pub use notifier::{
    render_confirmation, Confirmation, ConfirmationSink, DeferredNotifier, StdoutSink,
    CONFIRMATION_MARKER,
};
pub use session::{BookingSession, SessionError, SessionSummary, TokenReader};
pub use sync::{CompletionBarrier, CompletionGuard};
