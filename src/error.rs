//! Recoverable wheel errors
//!
//! None of these are fatal. Every failed command leaves the session unchanged, and the
//! front end decides whether to warn the user or ignore it.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WheelError {
    #[error("\"{0}\" is already on the wheel")]
    DuplicateOption(String),
    #[error("Option label is empty")]
    EmptyLabel,
    #[error("Add some choices before spinning")]
    EmptyWheel,
    #[error("The wheel is already spinning")]
    AlreadySpinning,
    #[error("Choices can't be changed while the wheel is spinning")]
    Locked,
}

impl WheelError {
    /// Whether the front end should tell the user about this error
    ///
    /// Blank input and spin requests the UI never offers are dropped quietly.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, WheelError::DuplicateOption(_) | WheelError::Locked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message_names_label() {
        let err = WheelError::DuplicateOption("Pizza".to_string());
        assert_eq!(err.to_string(), "\"Pizza\" is already on the wheel");
        assert!(err.is_user_facing());
    }

    #[test]
    fn test_silent_errors() {
        assert!(!WheelError::EmptyLabel.is_user_facing());
        assert!(!WheelError::EmptyWheel.is_user_facing());
        assert!(!WheelError::AlreadySpinning.is_user_facing());
    }
}
