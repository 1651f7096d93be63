//! Random source configuration

use serde::Deserialize;

/// Controls how diagnosis draws are seeded
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct RandomConfig {
    /// Fixed seed for reproducible runs; OS entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}
