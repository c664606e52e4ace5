//! Action dispatch error types.

use crate::core::error_handling::ContextualError;

/// Errors that abort the interactive loop. Remediation command failures are
/// not errors; they are reported inline and the operator chooses again.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("interactive prompt failed: {0}")]
    Prompt(#[from] std::io::Error),
}

pub type ActionResult<T> = Result<T, ActionError>;

impl ContextualError for ActionError {
    fn is_user_actionable(&self) -> bool {
        match self {
            ActionError::Prompt(_) => false,
        }
    }

    fn user_message(&self) -> Option<&str> {
        None
    }
}
