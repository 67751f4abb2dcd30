use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use super::{render_confirmation, Confirmation};

/// Destination for confirmations once their delay has elapsed.
///
/// Delivery is fire-and-forget: implementations log failures instead of
/// returning them.
#[async_trait]
pub trait ConfirmationSink: Send + Sync {
    /// Deliver one confirmation.
    async fn deliver(&self, confirmation: &Confirmation);

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Writes the rendered confirmation block to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

#[async_trait]
impl ConfirmationSink for StdoutSink {
    async fn deliver(&self, confirmation: &Confirmation) {
        // One write per block so it doesn't interleave with the main flow.
        let block = render_confirmation(confirmation);
        let mut stdout = tokio::io::stdout();
        if let Err(e) = stdout.write_all(block.as_bytes()).await {
            tracing::error!("Failed to write confirmation: {}", e);
            return;
        }
        if let Err(e) = stdout.flush().await {
            tracing::error!("Failed to flush confirmation: {}", e);
        }
    }

    fn name(&self) -> &'static str {
        "stdout"
    }
}
