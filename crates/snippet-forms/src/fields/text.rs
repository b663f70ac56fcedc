//! Text field types.

use crate::form::FormFieldDef;
use crate::validation::RequiredValidator;
use crate::widgets::{BootstrapTextInput, BootstrapTextarea};

/// Creates a single-line text field.
///
/// When `required_message` is set the field is marked required and an
/// empty value fails with that message.
pub fn char_field(name: &str, label: &str, required_message: Option<&str>) -> FormFieldDef {
    let field = FormFieldDef::new(name, label, BootstrapTextInput::new());
    require(field, required_message)
}

/// Creates a multi-line text field (fixed-size textarea).
pub fn text_field(
    name: &str,
    label: &str,
    rows: usize,
    placeholder: &str,
    required_message: Option<&str>,
) -> FormFieldDef {
    let widget = BootstrapTextarea::new(rows)
        .placeholder(placeholder)
        .fixed_size();
    let field = FormFieldDef::new(name, label, widget);
    require(field, required_message)
}

pub(super) fn require(field: FormFieldDef, required_message: Option<&str>) -> FormFieldDef {
    match required_message {
        Some(message) => field
            .required()
            .validator(RequiredValidator::with_message(message)),
        None => field,
    }
}
