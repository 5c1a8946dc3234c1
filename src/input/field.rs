use super::{ValidationResult, ValidationState, Validator};

const SECURE_MASK: char = '•';

/// How the field border is coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTone {
    Error,
    Warning,
    Focused,
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelTone {
    Error,
    Warning,
    Normal,
}

/// The state of one text input: its value, its flags and the verdict of its
/// validator for the current value.
pub struct InputField {
    value: String,
    label: Option<String>,
    hint: Option<String>,
    secure: bool,
    enabled: bool,
    read_only: bool,
    focused: bool,
    validator: Option<Validator>,
    verdict: ValidationResult,
}

impl Default for InputField {
    fn default() -> Self {
        InputField {
            value: String::new(),
            label: None,
            hint: None,
            secure: false,
            enabled: true,
            read_only: false,
            focused: false,
            validator: None,
            verdict: ValidationResult::none(),
        }
    }
}

impl InputField {
    pub fn new(value: &str) -> Self {
        InputField {
            value: value.to_owned(),
            ..InputField::default()
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_owned());
        self
    }

    pub fn hint(mut self, hint: &str) -> Self {
        self.hint = Some(hint.to_owned());
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn validator(mut self, validator: impl Fn(&str) -> ValidationResult + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self.revalidate();
        self
    }

    fn revalidate(&mut self) {
        self.verdict = self
            .validator
            .as_ref()
            .map_or_else(ValidationResult::none, |validate| validate(&self.value));
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn hint_text(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Replaces the value and re-runs the validator. Disabled and read-only
    /// fields keep their value.
    pub fn set_value(&mut self, value: &str) -> &ValidationResult {
        if self.enabled && !self.read_only && value != self.value {
            self.value = value.to_owned();
            self.revalidate();
        }
        &self.verdict
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused && self.enabled;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_secure(&mut self, secure: bool) {
        self.secure = secure;
    }

    pub fn validation(&self) -> &ValidationResult {
        &self.verdict
    }

    pub fn message(&self) -> Option<&str> {
        self.verdict.message.as_deref()
    }

    pub fn tone(&self) -> FieldTone {
        match self.verdict.state {
            ValidationState::Error => FieldTone::Error,
            ValidationState::Warning => FieldTone::Warning,
            ValidationState::None if self.focused => FieldTone::Focused,
            ValidationState::None => FieldTone::Idle,
        }
    }

    pub fn label_tone(&self) -> LabelTone {
        match self.verdict.state {
            ValidationState::Error => LabelTone::Error,
            ValidationState::Warning => LabelTone::Warning,
            ValidationState::None => LabelTone::Normal,
        }
    }

    pub fn display_value(&self) -> String {
        if self.secure {
            self.value.chars().map(|_| SECURE_MASK).collect()
        } else {
            self.value.clone()
        }
    }
}
