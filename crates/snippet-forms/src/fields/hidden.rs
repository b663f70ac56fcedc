//! Hidden field type.

use crate::form::FormFieldDef;
use crate::widgets::HiddenInput;

/// Creates a hidden field.
pub fn hidden_field(name: &str, initial: Option<&str>) -> FormFieldDef {
    let mut field = FormFieldDef::new(name, "", HiddenInput);

    if let Some(value) = initial {
        field = field.initial(value);
    }

    field
}
