//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `HYPOCHONDRIAPP`
//! prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use hypochondriapp::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Diagnosis revealed after {:?}", config.reveal.delay());
//! ```

mod error;
mod logging;
mod random;
mod reveal;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use random::RandomConfig;
pub use reveal::{RevealConfig, MAX_REVEAL_DELAY_MS};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment is a valid setup.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Pause before the diagnosis is shown
    #[serde(default)]
    pub reveal: RevealConfig,

    /// Seeding of the diagnosis draws
    #[serde(default)]
    pub random: RandomConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `HYPOCHONDRIAPP` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `HYPOCHONDRIAPP__REVEAL__DELAY_MS=500` -> `reveal.delay_ms = 500`
    /// - `HYPOCHONDRIAPP__RANDOM__SEED=42` -> `random.seed = 42`
    /// - `HYPOCHONDRIAPP__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("HYPOCHONDRIAPP")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.reveal.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, seed: Option<u64>, reveal_delay_ms: Option<u64>) -> Self {
        if seed.is_some() {
            self.random.seed = seed;
        }
        if let Some(delay_ms) = reveal_delay_ms {
            self.reveal.delay_ms = delay_ms;
        }
        self
    }
}
