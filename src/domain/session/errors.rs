//! Wizard error types.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

use super::Screen;

/// Errors raised when the wizard is driven out of order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Cannot go from {from} to {to}")]
    InvalidTransition { from: Screen, to: Screen },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl WizardError {
    pub fn invalid_transition(from: Screen, to: Screen) -> Self {
        WizardError::InvalidTransition { from, to }
    }
}
