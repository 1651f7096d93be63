//! Reveal Timer Adapters
//!
//! - **TokioRevealTimer** - Real pause using `tokio::time::sleep`
//! - **InstantRevealTimer** - Returns immediately and records requested delays (testing)

mod instant_reveal_timer;
mod tokio_reveal_timer;

pub use instant_reveal_timer::InstantRevealTimer;
pub use tokio_reveal_timer::TokioRevealTimer;
