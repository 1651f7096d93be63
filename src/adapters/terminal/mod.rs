//! Terminal Adapter
//!
//! Renders the four wizard screens as plain text and turns input lines
//! into wizard callbacks. Generic over its reader and writer so tests can
//! drive it with in-memory buffers.
//!
//! ## Symptom screen commands
//!
//! - any text - records a symptom
//! - `/remove N` - removes symptom N
//! - `/info TEXT` - sets the additional information
//! - `/list` - shows what has been entered
//! - `/done` - submits

mod console;
mod render;

pub use console::{ConsoleError, ConsoleUi};
