//! HTML rendering of the snippet form.

use snippet_forms::fields::hidden_field;
use snippet_forms::{render_bootstrap_form, FormAction, ValidationErrors};

use crate::config::{EditorConfig, Operation};
use crate::dispatch::FormMode;
use crate::state::SnippetFormState;
use crate::validation::snippet_fields;

/// Renders the four fields, their error messages and the form actions.
///
/// The Delete button is only rendered for a stored snippet.
pub fn render_snippet_form(
    state: &SnippetFormState,
    mode: &FormMode,
    config: &EditorConfig,
    errors: &ValidationErrors,
) -> String {
    let mut fields = snippet_fields();
    let mut actions = vec![
        FormAction::submit("Save"),
        FormAction::link("Cancel", &config.listing_path),
    ];

    let operation = match mode {
        FormMode::Create => Operation::Create,
        FormMode::Update(id) => {
            fields.push(hidden_field("id", Some(id.as_str())));
            actions.push(
                FormAction::button("Delete", "_delete")
                    .with_attr("data-id", id.as_str())
                    .with_attr("data-method", Operation::Delete.method().as_str())
                    .with_attr("data-action", config.path(Operation::Delete)),
            );
            Operation::Update
        }
    };

    render_bootstrap_form(
        &fields,
        &state.values(),
        errors,
        config.path(operation),
        "post",
        &actions,
    )
}
