//! RevealTimer port - The pause between "Analyzing..." and the result.

use async_trait::async_trait;
use std::time::Duration;

/// Port for the non-cancellable reveal delay.
#[async_trait]
pub trait RevealTimer: Send + Sync {
    /// Waits for `delay` before returning.
    async fn wait(&self, delay: Duration);
}
