//! Recording confirmation sink for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::notifier::{render_confirmation, Confirmation, ConfirmationSink};

/// A confirmation captured by [`RecordingSink`].
#[derive(Debug, Clone)]
pub struct RecordedDelivery {
    /// The confirmation that was delivered.
    pub confirmation: Confirmation,
    /// Rendered block, as the stdout sink would print it.
    pub rendered: String,
    /// When delivery happened (tokio clock, so paused tests see mocked time).
    pub at: Instant,
}

/// In-memory implementation of the ConfirmationSink trait.
///
/// # Example
///
/// ```rust,ignore
/// use booking_core::testing::RecordingSink;
///
/// let sink = Arc::new(RecordingSink::new());
/// let notifier = DeferredNotifier::new(Duration::ZERO, sink.clone());
///
/// notifier.launch(confirmation, &barrier);
/// barrier.wait().await;
///
/// assert_eq!(sink.delivered_count().await, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    deliveries: Arc<RwLock<Vec<RecordedDelivery>>>,
}

impl RecordingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded deliveries.
    pub async fn deliveries(&self) -> Vec<RecordedDelivery> {
        self.deliveries.read().await.clone()
    }

    /// Get the number of deliveries.
    pub async fn delivered_count(&self) -> usize {
        self.deliveries.read().await.len()
    }

    /// Clear recorded deliveries.
    pub async fn clear(&self) {
        self.deliveries.write().await.clear();
    }
}

#[async_trait]
impl ConfirmationSink for RecordingSink {
    async fn deliver(&self, confirmation: &Confirmation) {
        self.deliveries.write().await.push(RecordedDelivery {
            confirmation: confirmation.clone(),
            rendered: render_confirmation(confirmation),
            at: Instant::now(),
        });
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
