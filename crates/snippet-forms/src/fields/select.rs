//! Select field types.

use crate::form::FormFieldDef;
use crate::validation::ChoiceValidator;
use crate::widgets::BootstrapSelect;

use super::text::require;

/// Creates a choice field (select/dropdown).
///
/// A required choice field also rejects values outside `choices`, using
/// the same message, since a select cannot submit anything else.
pub fn choice_field(
    name: &str,
    label: &str,
    choices: &[(&str, &str)],
    required_message: Option<&str>,
) -> FormFieldDef {
    let widget = BootstrapSelect::new(choices.to_vec());
    let field = require(FormFieldDef::new(name, label, widget), required_message);

    match required_message {
        Some(message) => field.validator(ChoiceValidator::with_message(
            choices.iter().map(|(value, _)| *value),
            message,
        )),
        None => field,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHOICES: &[(&str, &str)] = &[("draft", "Draft"), ("published", "Published")];

    #[test]
    fn test_choice_field() {
        let field = choice_field("status", "Status", CHOICES, Some("Status is required"));
        assert_eq!(field.name, "status");
        assert!(field.required);
        assert!(field.clean("draft").is_ok());
        assert_eq!(field.clean(""), Err("Status is required".to_string()));
        assert_eq!(field.clean("archived"), Err("Status is required".to_string()));
    }

    #[test]
    fn test_optional_choice_field() {
        let field = choice_field("status", "Status", CHOICES, None);
        assert!(!field.required);
        assert!(field.clean("anything").is_ok());
    }
}
