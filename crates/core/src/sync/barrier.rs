//! Counter-based wait-for-completion primitive.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

#[derive(Debug, Default)]
struct Inner {
    outstanding: AtomicUsize,
    notify: Notify,
}

/// Lets one waiter block until every registered task has finished.
///
/// This is cheaply cloneable; clones share the same count. Register work
/// with [`add`](Self::add) (or [`register`](Self::register)) *before* the
/// task is spawned, otherwise [`wait`](Self::wait) may return early.
///
/// # Example
///
/// ```rust
/// use booking_core::CompletionBarrier;
///
/// # tokio_test::block_on(async {
/// let barrier = CompletionBarrier::new();
/// let guard = barrier.register();
/// tokio::spawn(async move {
///     // ... do work ...
///     drop(guard);
/// });
/// barrier.wait().await;
/// assert_eq!(barrier.outstanding(), 0);
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompletionBarrier {
    inner: Arc<Inner>,
}

impl CompletionBarrier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increase the outstanding count by `n`.
    pub fn add(&self, n: usize) {
        let now = self.inner.outstanding.fetch_add(n, Ordering::SeqCst) + n;
        tracing::trace!(outstanding = now, "Completion barrier add");
    }

    /// Mark one outstanding task as finished.
    ///
    /// Wakes the waiter when the count reaches zero. An unmatched call is
    /// logged and ignored; the count never wraps.
    pub fn done(&self) {
        let previous =
            self.inner
                .outstanding
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |count| {
                    count.checked_sub(1)
                });

        match previous {
            Ok(1) => {
                tracing::trace!("Completion barrier released");
                self.inner.notify.notify_waiters();
            }
            Ok(previous) => {
                tracing::trace!(outstanding = previous - 1, "Completion barrier done");
            }
            Err(_) => {
                tracing::error!("Completion barrier done() called with nothing outstanding");
            }
        }
    }

    /// Register one task and get a guard that signals [`done`](Self::done)
    /// exactly once when dropped.
    pub fn register(&self) -> CompletionGuard {
        self.add(1);
        CompletionGuard {
            barrier: self.clone(),
        }
    }

    /// Suspend until the outstanding count is zero.
    ///
    /// Returns immediately if nothing is outstanding. There is no deadline;
    /// wrap in `tokio::time::timeout` to bound it.
    pub async fn wait(&self) {
        loop {
            let notified = self.inner.notify.notified();
            tokio::pin!(notified);
            // Register interest before reading the count so a release
            // between the check and the await is not lost.
            notified.as_mut().enable();

            if self.outstanding() == 0 {
                return;
            }
            notified.await;
        }
    }

    pub fn outstanding(&self) -> usize {
        self.inner.outstanding.load(Ordering::SeqCst)
    }
}

/// Outstanding registration on a [`CompletionBarrier`].
#[derive(Debug)]
#[must_use = "dropping the guard immediately marks the task as done"]
pub struct CompletionGuard {
    barrier: CompletionBarrier,
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        self.barrier.done();
    }
}
