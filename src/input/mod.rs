//! Input validation for the app's text fields.
//!
//! A validator maps the current field value to a [`ValidationResult`]. An
//! `Error` verdict is ordinary output rendered as feedback, never a failure.

mod email;
mod field;
pub mod validators;

pub use email::is_email_shaped;
pub use field::{FieldTone, InputField, LabelTone};
pub use validators::{
    character_limit, combine, email, min_length, password, phone, required, Validator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationState {
    None,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub state: ValidationState,
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn none() -> Self {
        ValidationResult {
            state: ValidationState::None,
            message: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        ValidationResult {
            state: ValidationState::Warning,
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ValidationResult {
            state: ValidationState::Error,
            message: Some(message.into()),
        }
    }

    pub fn is_none(&self) -> bool {
        self.state == ValidationState::None
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        ValidationResult::none()
    }
}

/// Boxes each argument into a [`Validator`], e.g. for [`combine`].
#[macro_export]
macro_rules! validators {
    ($($validator:expr),* $(,)?) => {
        vec![$(Box::new($validator) as $crate::input::Validator),*]
    };
}
