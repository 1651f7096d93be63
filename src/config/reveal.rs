//! Reveal delay configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Longest pause allowed before a diagnosis is shown.
pub const MAX_REVEAL_DELAY_MS: u64 = 60_000;

/// How long "Analyzing Your Condition..." stays on screen
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RevealConfig {
    /// Delay in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl RevealConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Validate reveal configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.delay_ms > MAX_REVEAL_DELAY_MS {
            return Err(ValidationError::RevealDelayTooLong {
                max_ms: MAX_REVEAL_DELAY_MS,
                actual_ms: self.delay_ms,
            });
        }
        Ok(())
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

fn default_delay_ms() -> u64 {
    2_000
}
