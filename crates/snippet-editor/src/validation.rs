//! Field definitions of the snippet form and the validation run before dispatch.

use snippet_forms::fields::{char_field, choice_field, text_field};
use snippet_forms::{validate_fields, FormBuilder, FormFieldDef, ValidationErrors};

use crate::model::Language;
use crate::state::{Field, SnippetFormState};

const DESCRIPTION_ROWS: usize = 3;
const CODE_ROWS: usize = 10;

/// Builds the four field definitions in display order.
pub fn snippet_fields() -> Vec<FormFieldDef> {
    let languages: Vec<(&str, &str)> = Language::ALL
        .iter()
        .map(|lang| (lang.as_str(), lang.as_str()))
        .collect();

    FormBuilder::new()
        .field(char_field(
            Field::Name.name(),
            Field::Name.label(),
            Some(Field::Name.required_message()),
        ))
        .field(choice_field(
            Field::Language.name(),
            Field::Language.label(),
            &languages,
            Some(Field::Language.required_message()),
        ))
        .field(text_field(
            Field::Description.name(),
            Field::Description.label(),
            DESCRIPTION_ROWS,
            "What does the snippet do?",
            Some(Field::Description.required_message()),
        ))
        .field(text_field(
            Field::Code.name(),
            Field::Code.label(),
            CODE_ROWS,
            "ex. console.log('helloworld')",
            Some(Field::Code.required_message()),
        ))
        .build()
}

/// Checks every field and maps each violating field to its message.
///
/// Empty means the form may be submitted.
pub fn validate(state: &SnippetFormState) -> ValidationErrors {
    validate_fields(&snippet_fields(), &state.values())
}
