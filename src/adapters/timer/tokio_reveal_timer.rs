//! Tokio-backed reveal timer.

use async_trait::async_trait;
use std::time::Duration;

use crate::ports::RevealTimer;

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioRevealTimer;

impl TokioRevealTimer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RevealTimer for TokioRevealTimer {
    async fn wait(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn waits_at_least_the_requested_delay() {
        let started = Instant::now();
        TokioRevealTimer::new().wait(Duration::from_millis(20)).await;
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn zero_delay_returns_immediately() {
        let started = Instant::now();
        TokioRevealTimer::new().wait(Duration::ZERO).await;
        assert!(started.elapsed() < Duration::from_millis(50));
    }
}
