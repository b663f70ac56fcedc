//! Form field validators.

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a value and returns an error message if invalid.
    fn validate(&self, value: &str) -> Result<(), String>;

    /// Returns the error message for this validator.
    fn message(&self) -> &str;
}

/// Validator that requires a non-empty value.
///
/// Only the empty string is rejected; whitespace counts as content.
#[derive(Debug, Clone)]
pub struct RequiredValidator {
    message: String,
}

impl RequiredValidator {
    /// Creates a new RequiredValidator with default message.
    pub fn new() -> Self {
        Self::with_message("This field is required.")
    }

    /// Creates a new RequiredValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for RequiredValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for RequiredValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.is_empty() {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator that only accepts one of a fixed set of values.
#[derive(Debug, Clone)]
pub struct ChoiceValidator {
    choices: Vec<String>,
    message: String,
}

impl ChoiceValidator {
    /// Creates a new ChoiceValidator accepting the given values.
    pub fn new<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_message(choices, "Select a valid choice.")
    }

    /// Creates a new ChoiceValidator with custom message.
    pub fn with_message<I, S>(choices: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }
}

impl Validator for ChoiceValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if self.choices.iter().any(|c| c == value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_validator() {
        let v = RequiredValidator::new();
        assert!(v.validate("hello").is_ok());
        assert!(v.validate("   ").is_ok());
        assert_eq!(v.validate(""), Err("This field is required.".to_string()));
    }

    #[test]
    fn test_choice_validator() {
        let v = ChoiceValidator::new(["a", "b"]);
        assert!(v.validate("a").is_ok());
        assert!(v.validate("c").is_err());
        assert!(v.validate("").is_err());
        assert_eq!(v.message(), "Select a valid choice.");
    }
}
