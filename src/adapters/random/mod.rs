//! Random Source Adapters
//!
//! Implementations of the RandomSource port.
//!
//! ## Available Adapters
//!
//! - **RngRandomSource** - Backed by `rand` (OS-seeded or fixed seed)
//! - **ScriptedRandomSource** - Replays a fixed list of draws (testing)
//!
//! ## Usage
//!
//! ```ignore
//! // Production: fresh entropy every run
//! let rng = RngRandomSource::from_os();
//!
//! // Reproducible run
//! let rng = RngRandomSource::seeded(42);
//!
//! // Testing: exact draws
//! let rng = ScriptedRandomSource::new(vec![0.0, 0.99]);
//! ```

mod rng_random_source;
mod scripted_random_source;

pub use rng_random_source::RngRandomSource;
pub use scripted_random_source::ScriptedRandomSource;
