//! Error types for forms.

use std::collections::HashMap;
use thiserror::Error;

/// Key under which errors that belong to no single field are stored.
pub const NON_FIELD_ERRORS: &str = "__all__";

/// Form-specific errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// A value was looked up for a field the form does not declare.
    #[error("unknown field: {0}")]
    UnknownField(String),
}

/// Collection of validation errors by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    /// Errors keyed by field name.
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Adds an error that is not attached to any field.
    pub fn add_non_field(&mut self, message: impl Into<String>) {
        self.add(NON_FIELD_ERRORS, message);
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns errors for a specific field.
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    /// Returns the first error for a field.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// Returns whether a field has at least one error.
    pub fn has(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut fields: Vec<_> = self.errors.iter().collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));
        for (field, messages) in fields {
            for message in messages {
                writeln!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_lookup() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "Name is required");
        errors.add("name", "Too short");
        errors.add_non_field("Request failed");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first("name"), Some("Name is required"));
        assert!(errors.has(NON_FIELD_ERRORS));
        assert!(!errors.has("code"));
        assert_eq!(errors.get("name").map(Vec::len), Some(2));
    }

    #[test]
    fn test_unknown_field_message() {
        let err = FormError::UnknownField("id".to_string());
        assert_eq!(err.to_string(), "unknown field: id");
    }

    #[test]
    fn test_display_is_sorted() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "Name is required");
        errors.add("code", "Code is required");
        assert_eq!(
            errors.to_string(),
            "code: Code is required\nname: Name is required\n"
        );
    }
}
