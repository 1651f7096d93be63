//! Wizard session.
//!
//! - `Screen` - The four-state screen selector
//! - `Session` - Symptoms, score and diagnosis for one pass
//! - `Wizard` - Orchestrates the screens and owns the session

mod aggregate;
mod errors;
mod screen;
mod wizard;

pub use aggregate::Session;
pub use errors::WizardError;
pub use screen::Screen;
pub use wizard::Wizard;
