//! Reveal timer that never sleeps.
//!
//! Keeps a log of the delays it was asked for so tests can check that
//! configuration reaches the timer.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::ports::RevealTimer;

#[derive(Debug, Clone, Default)]
pub struct InstantRevealTimer {
    requested: Arc<Mutex<Vec<Duration>>>,
}

impl InstantRevealTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays requested so far, oldest first.
    pub fn requested(&self) -> Vec<Duration> {
        self.requested
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl RevealTimer for InstantRevealTimer {
    async fn wait(&self, delay: Duration) {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_each_wait() {
        let timer = InstantRevealTimer::new();
        timer.wait(Duration::from_secs(2)).await;
        timer.wait(Duration::from_millis(5)).await;

        assert_eq!(
            timer.requested(),
            vec![Duration::from_secs(2), Duration::from_millis(5)]
        );
    }

    #[tokio::test]
    async fn clones_share_the_log() {
        let timer = InstantRevealTimer::new();
        let handle = timer.clone();
        timer.wait(Duration::from_millis(1)).await;
        assert_eq!(handle.requested().len(), 1);
    }
}
