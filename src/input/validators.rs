use super::{is_email_shaped, ValidationResult};

pub type Validator = Box<dyn Fn(&str) -> ValidationResult>;

const PASSWORD_MIN_LENGTH: usize = 6;
const PHONE_MIN_LENGTH: usize = 10;

// Lengths count characters, not bytes.
fn length(input: &str) -> usize {
    input.chars().count()
}

pub fn required(input: &str) -> ValidationResult {
    if input.is_empty() {
        ValidationResult::error("Required")
    } else {
        ValidationResult::none()
    }
}

pub fn email(input: &str) -> ValidationResult {
    if is_email_shaped(input) {
        ValidationResult::none()
    } else {
        ValidationResult::error("Invalid email")
    }
}

pub fn password(input: &str) -> ValidationResult {
    if length(input) < PASSWORD_MIN_LENGTH {
        ValidationResult::error("Password too short")
    } else {
        ValidationResult::none()
    }
}

/// A negative minimum is treated as zero.
pub fn min_length(min: i64) -> impl Fn(&str) -> ValidationResult {
    let min = min.max(0) as usize;
    move |input| {
        if length(input) < min {
            ValidationResult::error(format!("Minimum length {}", min))
        } else {
            ValidationResult::none()
        }
    }
}

/// An empty phone field passes; pair with [`required`] to demand one.
pub fn phone(input: &str) -> ValidationResult {
    if input.is_empty() {
        ValidationResult::none()
    } else if length(input) < PHONE_MIN_LENGTH {
        ValidationResult::error("Phone number must be at least 10 digits")
    } else if !input
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' '))
    {
        ValidationResult::error("Invalid phone number format")
    } else {
        ValidationResult::none()
    }
}

/// Errors above `limit` characters and warns once the value grows past
/// `warn_above`.
pub fn character_limit(limit: usize, warn_above: usize) -> impl Fn(&str) -> ValidationResult {
    move |input| {
        let len = length(input);
        if len > limit {
            ValidationResult::error(format!("Must be {} characters or less", limit))
        } else if len > warn_above {
            ValidationResult::warning(format!(
                "Approaching character limit ({}/{})",
                len, limit
            ))
        } else {
            ValidationResult::none()
        }
    }
}

/// Runs `validators` in order and returns the first verdict that is not
/// `None`.
pub fn combine(validators: Vec<Validator>) -> impl Fn(&str) -> ValidationResult {
    move |input| {
        validators
            .iter()
            .map(|validator| validator(input))
            .find(|result| !result.is_none())
            .unwrap_or_default()
    }
}
