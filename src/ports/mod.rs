//! Ports - Interfaces for the capabilities the domain borrows from outside.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RandomSource` - Uniform random draws for the diagnosis selector
//! - `RevealTimer` - The cosmetic pause before a diagnosis is shown

mod random_source;
mod reveal_timer;

pub use random_source::RandomSource;
pub use reveal_timer::RevealTimer;
