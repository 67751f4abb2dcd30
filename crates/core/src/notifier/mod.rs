//! Deferred ticket confirmations.
//!
//! A [`DeferredNotifier`] launches one background task per booking. The task
//! waits a fixed delay, hands the [`Confirmation`] to a [`ConfirmationSink`]
//! and then releases its registration on the [`CompletionBarrier`].
//!
//! [`CompletionBarrier`]: crate::sync::CompletionBarrier

mod deferred;
mod sink;
mod types;

pub use deferred::DeferredNotifier;
pub use sink::{ConfirmationSink, StdoutSink};
pub use types::{render_confirmation, Confirmation, CONFIRMATION_MARKER};
