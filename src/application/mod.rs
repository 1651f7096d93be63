//! Application layer - wires the wizard to its ports.
//!
//! The domain `Wizard` is pure apart from the random draws handed to it.
//! `WizardService` supplies those draws, applies the reveal delay and
//! logs every transition.

mod wizard_service;

pub use wizard_service::WizardService;
