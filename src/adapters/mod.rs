//! Adapters - Implementations of port interfaces and the terminal front end.
//!
//! - `random` - RandomSource implementations (rand-backed, scripted)
//! - `timer` - RevealTimer implementations (tokio sleep, instant)
//! - `terminal` - Line-oriented console UI over any `BufRead`/`Write`

pub mod random;
pub mod terminal;
pub mod timer;

pub use random::{RngRandomSource, ScriptedRandomSource};
pub use terminal::{ConsoleError, ConsoleUi};
pub use timer::{InstantRevealTimer, TokioRevealTimer};
