use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use super::{Confirmation, ConfirmationSink};
use crate::sync::CompletionBarrier;

/// Launches one delayed confirmation task per booking.
#[derive(Clone)]
pub struct DeferredNotifier {
    delay: Duration,
    sink: Arc<dyn ConfirmationSink>,
}

impl DeferredNotifier {
    pub fn new(delay: Duration, sink: Arc<dyn ConfirmationSink>) -> Self {
        Self { delay, sink }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Spawn the confirmation task.
    ///
    /// The task is registered on `barrier` before it is spawned and releases
    /// that registration exactly once when it finishes.
    pub fn launch(&self, confirmation: Confirmation, barrier: &CompletionBarrier) -> JoinHandle<()> {
        let guard = barrier.register();
        let delay = self.delay;
        let sink = Arc::clone(&self.sink);

        tracing::debug!(
            email = %confirmation.email,
            delay_ms = delay.as_millis() as u64,
            sink = sink.name(),
            "Launching deferred confirmation"
        );

        tokio::spawn(async move {
            let _guard = guard;
            tokio::time::sleep(delay).await;
            sink.deliver(&confirmation).await;
            tracing::info!(
                tickets = confirmation.tickets,
                email = %confirmation.email,
                "Confirmation sent"
            );
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSink;
    use tokio::time::{timeout, Instant};

    fn confirmation(first: &str, tickets: u32) -> Confirmation {
        Confirmation {
            tickets,
            first_name: first.to_string(),
            last_name: "Tester".to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_delivers_after_delay() {
        let sink = Arc::new(RecordingSink::new());
        let notifier = DeferredNotifier::new(Duration::from_secs(10), sink.clone());
        let barrier = CompletionBarrier::new();

        let started = Instant::now();
        notifier.launch(confirmation("Ada", 3), &barrier);
        assert_eq!(barrier.outstanding(), 1);

        tokio::time::sleep(Duration::from_secs(9)).await;
        assert!(sink.deliveries().await.is_empty());

        barrier.wait().await;
        let deliveries = sink.deliveries().await;
        assert_eq!(deliveries.len(), 1);
        assert_eq!(deliveries[0].confirmation.tickets, 3);
        assert!(deliveries[0].at.duration_since(started) >= Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_barrier_registered_before_task_runs() {
        let sink = Arc::new(RecordingSink::new());
        let notifier = DeferredNotifier::new(Duration::ZERO, sink.clone());
        let barrier = CompletionBarrier::new();

        let handle = notifier.launch(confirmation("Ada", 1), &barrier);
        // Registration is synchronous with launch, not deferred to the task.
        assert_eq!(barrier.outstanding(), 1);

        handle.await.unwrap();
        assert_eq!(barrier.outstanding(), 0);
    }

    #[tokio::test]
    async fn test_multiple_launches_share_barrier() {
        let sink = Arc::new(RecordingSink::new());
        let notifier = DeferredNotifier::new(Duration::from_millis(20), sink.clone());
        let barrier = CompletionBarrier::new();

        notifier.launch(confirmation("Ada", 1), &barrier);
        notifier.launch(confirmation("Grace", 2), &barrier);
        assert_eq!(barrier.outstanding(), 2);

        let result = timeout(Duration::from_secs(1), barrier.wait()).await;
        assert!(result.is_ok());
        assert_eq!(sink.delivered_count().await, 2);
    }
}
