//! The snippet form component: submit and delete.

use snippet_forms::ValidationErrors;
use tracing::{debug, error, warn};

use crate::config::{EditorConfig, Operation};
use crate::error::RequestError;
use crate::http::ApiRequest;
use crate::model::{DeletePayload, Snippet, SnippetId, UpdatePayload};
use crate::navigation::Navigator;
use crate::render::render_snippet_form;
use crate::state::{Field, SnippetFormState};
use crate::transport::Transport;

/// Whether the form creates a new snippet or edits a stored one.
///
/// Fixed when the form is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// No snippet was loaded; saving creates one.
    Create,
    /// The snippet with this id was loaded; saving updates it.
    Update(SnippetId),
}

/// Result of [`SnippetForm::submit`].
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The request was sent and the form navigated away.
    Saved,
    /// Validation failed; nothing was sent.
    Invalid(ValidationErrors),
    /// The request failed; the form stayed where it was.
    Failed(RequestError),
}

/// Result of [`SnippetForm::delete`].
#[derive(Debug)]
pub enum DeleteOutcome {
    /// The request was sent and the form navigated away.
    Deleted,
    /// No stored snippet is loaded, so there is nothing to delete.
    Unavailable,
    /// The request failed; the form stayed where it was.
    Failed(RequestError),
}

/// A form for creating, editing and deleting one snippet.
///
/// Requests go through `T`; after a request completes the form navigates
/// through `N` to the listing path. Calls are not serialized: submitting
/// twice while a request is in flight sends two requests.
pub struct SnippetForm<T, N> {
    transport: T,
    navigator: N,
    config: EditorConfig,
    mode: FormMode,
    state: SnippetFormState,
}

impl<T, N> std::fmt::Debug for SnippetForm<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnippetForm")
            .field("config", &self.config)
            .field("mode", &self.mode)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<T: Transport, N: Navigator> SnippetForm<T, N> {
    /// Creates a form, pre-filled from `existing` when given.
    pub fn new(existing: Option<&Snippet>, transport: T, navigator: N) -> Self {
        let mode = existing.map_or(FormMode::Create, |snippet| {
            FormMode::Update(snippet.id.clone())
        });
        Self {
            transport,
            navigator,
            config: EditorConfig::default(),
            mode,
            state: SnippetFormState::new(existing.map(|snippet| &snippet.data)),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    pub const fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Returns the mode chosen at construction.
    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Returns the field state.
    pub const fn state(&self) -> &SnippetFormState {
        &self.state
    }

    /// Sets a field value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.state.set(field, value);
    }

    /// Whether the delete action is offered.
    pub const fn can_delete(&self) -> bool {
        matches!(self.mode, FormMode::Update(_))
    }

    /// Validates the fields and, if they pass, creates or updates the snippet.
    pub async fn submit(&self) -> SubmitOutcome {
        let fields = match self.state.to_payload() {
            Ok(fields) => fields,
            Err(errors) => {
                debug!(fields = errors.len(), "snippet form is invalid");
                return SubmitOutcome::Invalid(errors);
            }
        };

        let (operation, request) = match &self.mode {
            FormMode::Create => (Operation::Create, self.request(Operation::Create, &fields)),
            FormMode::Update(id) => {
                let payload = UpdatePayload {
                    fields,
                    id: id.clone(),
                };
                (Operation::Update, self.request(Operation::Update, &payload))
            }
        };

        match self.perform(operation, request).await {
            Ok(()) => SubmitOutcome::Saved,
            Err(e) => SubmitOutcome::Failed(e),
        }
    }

    /// Deletes the loaded snippet. Field values are not validated.
    pub async fn delete(&self) -> DeleteOutcome {
        let FormMode::Update(id) = &self.mode else {
            debug!("delete requested without a stored snippet");
            return DeleteOutcome::Unavailable;
        };

        let payload = DeletePayload { id: id.clone() };
        let request = self.request(Operation::Delete, &payload);

        match self.perform(Operation::Delete, request).await {
            Ok(()) => DeleteOutcome::Deleted,
            Err(e) => DeleteOutcome::Failed(e),
        }
    }

    /// Renders the form, showing `errors` next to their fields.
    pub fn render(&self, errors: &ValidationErrors) -> String {
        render_snippet_form(&self.state, &self.mode, &self.config, errors)
    }

    /// Errors to render after a submit, honouring
    /// [`EditorConfig::surface_request_errors`].
    pub fn errors_for(&self, outcome: &SubmitOutcome) -> ValidationErrors {
        match outcome {
            SubmitOutcome::Invalid(errors) => errors.clone(),
            SubmitOutcome::Failed(e) => self.request_failure("save", e),
            SubmitOutcome::Saved => ValidationErrors::new(),
        }
    }

    /// Errors to render after a delete, honouring
    /// [`EditorConfig::surface_request_errors`].
    pub fn errors_for_delete(&self, outcome: &DeleteOutcome) -> ValidationErrors {
        match outcome {
            DeleteOutcome::Failed(e) => self.request_failure("delete", e),
            DeleteOutcome::Deleted | DeleteOutcome::Unavailable => ValidationErrors::new(),
        }
    }

    fn request_failure(&self, action: &str, e: &RequestError) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if self.config.surface_request_errors {
            errors.add_non_field(format!("Could not {action} the snippet: {e}"));
        }
        errors
    }

    fn request<P: serde::Serialize>(
        &self,
        operation: Operation,
        payload: &P,
    ) -> Result<ApiRequest, RequestError> {
        ApiRequest::json(operation.method(), self.config.path(operation), payload)
    }

    /// Sends the request and navigates on any response. Failures are
    /// logged and handed back, never raised.
    async fn perform(
        &self,
        operation: Operation,
        request: Result<ApiRequest, RequestError>,
    ) -> Result<(), RequestError> {
        let result = match request {
            Ok(request) => self.transport.send(request).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(response) => {
                if !response.is_success() {
                    warn!(%operation, status = response.status, "snippet API returned an error status");
                }
                self.navigator.navigate(&self.config.listing_path);
                Ok(())
            }
            Err(e) => {
                error!(%operation, error = %e, "snippet request failed");
                Err(e)
            }
        }
    }
}
