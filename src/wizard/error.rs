//! Wizard failure taxonomy
//!
//! Both variants are recoverable values, never panics: a blocked move
//! leaves the controller exactly where it was, and the caller re-renders
//! with the recorded messages.

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors surfaced by guarded wizard operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WizardError {
    /// One or more required fields of a step are missing or malformed.
    ///
    /// Keys are field names, values are display-ready messages. The
    /// controller also queues the same messages on itself so the active
    /// screen can render them inline.
    #[error("validation failed for {} field(s)", errors.len())]
    ValidationFailure {
        errors: BTreeMap<String, String>,
    },

    /// A jump or submission was attempted from an impermissible position.
    ///
    /// State is unchanged when this is returned.
    #[error("navigation blocked: {reason}")]
    NavigationBlocked { reason: String },
}

impl WizardError {
    pub(crate) fn blocked(reason: impl Into<String>) -> Self {
        WizardError::NavigationBlocked {
            reason: reason.into(),
        }
    }
}
